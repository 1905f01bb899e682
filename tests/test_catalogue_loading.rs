//! Catalogue loading through each strategy
//!
//! Directory-backed catalogues are written to temp dirs so malformed and
//! duplicate-bearing documents can be exercised end to end.

use starname_generator::core::detect_source;
use starname_generator::{
    CatalogueId, CatalogueSource, DirectorySource, EmbeddedSource, ErrorKind, GeneratorConfig,
    StarNameGenerator,
};
use std::fs;
use tempfile::TempDir;

fn catalogue_dir(stars: &str, constellations: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("starData.json"), stars).unwrap();
    fs::write(dir.path().join("constellationData.json"), constellations).unwrap();
    dir
}

#[test]
fn test_embedded_and_directory_agree_on_shipped_data() {
    let data = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
    let disk = DirectorySource::new(data);
    for id in CatalogueId::ALL {
        assert_eq!(EmbeddedSource.load(id).unwrap(), disk.load(id).unwrap());
    }
}

#[test]
fn test_shipped_constellations_are_distinct() {
    let constellations = EmbeddedSource.load(CatalogueId::Constellations).unwrap();
    assert_eq!(constellations.distinct_len(), constellations.len());
}

#[test]
fn test_duplicate_stars_collapse_for_unique_draws() {
    let dir = catalogue_dir(
        r#"["Mizar", "Alcor", "Mizar", "Mizar", "Polaris"]"#,
        r#"["Ursa Major", "Ursa Minor"]"#,
    );
    let mut generator = StarNameGenerator::new(Box::new(DirectorySource::new(dir.path())));
    generator.init().unwrap();

    let mut all = generator.random_star_list(3, true).unwrap();
    all.sort();
    assert_eq!(all, vec!["Alcor", "Mizar", "Polaris"]);

    let err = generator.random_star_list(4, true).unwrap_err();
    assert!(err.to_string().contains("4 requested, 3 available"));

    assert_eq!(generator.random_star_list(5, false).unwrap().len(), 5);
}

#[test]
fn test_malformed_documents_fail_init() {
    let cases = [
        "not json at all",
        r#"{"names": []}"#,
        r#""Vega""#,
        "[]",
        r#"["Vega", 7]"#,
        r#"["Vega", ""]"#,
    ];
    for stars in cases {
        let dir = catalogue_dir(stars, r#"["Lyra"]"#);
        let mut generator = StarNameGenerator::new(Box::new(DirectorySource::new(dir.path())));
        let err = generator.init().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Load, "document {:?}", stars);
        assert!(!generator.is_ready());
    }
}

#[test]
fn test_missing_constellation_file_fails_init() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("starData.json"), r#"["Vega"]"#).unwrap();
    let mut generator = StarNameGenerator::new(Box::new(DirectorySource::new(dir.path())));
    let err = generator.init().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Load);
    assert!(err.to_string().contains("constellationData.json"));
}

#[test]
fn test_detected_source_loads_directory() {
    let dir = catalogue_dir(r#"["Vega"]"#, r#"["Lyra"]"#);
    let config = GeneratorConfig {
        data_dir: Some(dir.path().to_path_buf()),
        seed: Some(1),
        ..Default::default()
    };
    let source = detect_source(&config).unwrap();
    assert_eq!(source.name(), "directory");

    let mut generator = StarNameGenerator::from_config(&config).unwrap();
    generator.init().unwrap();
    assert_eq!(generator.random_star().unwrap(), "Vega");
    assert_eq!(generator.random_constellation().unwrap(), "Lyra");
}
