//! starname-forge: rebuilds the starname-generator catalogues
//!
//! Both catalogues come from the sortable tables on Wikipedia's
//! "List of proper names of stars". Each data row starts with the
//! constellation, and its third cell holds the IAU proper name.
//!
//! ```rust,ignore
//! let html = starname_forge::fetch_page(starname_forge::WIKI_URL)?;
//! let stars = starname_forge::extract_star_names(&html)?;
//! starname_forge::write_catalogue(Path::new("data/starData.json"), &stars)?;
//! ```

pub mod error;
pub mod html;

pub use error::{ForgeError, Result};

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use std::time::Duration;

/// Source page for both catalogues
pub const WIKI_URL: &str = "https://en.wikipedia.org/wiki/List_of_proper_names_of_stars";

/// File name of the star catalogue
pub const STARS_FILE: &str = "starData.json";
/// File name of the constellation catalogue
pub const CONSTELLATIONS_FILE: &str = "constellationData.json";

const TABLE_CLASSES: &[&str] = &["wikitable", "sortable"];

lazy_static! {
    static ref FOOTNOTE: Regex = Regex::new(r"\[\w+?\]").unwrap();
}

/// IAU proper names, in page order, duplicates kept.
///
/// Rows with fewer than three cells are skipped, as are names marked with
/// a trailing dagger (not IAU-approved).
pub fn extract_star_names(html: &str) -> Result<Vec<String>> {
    let names: Vec<String> = html::table_rows(html, TABLE_CLASSES)
        .into_iter()
        .filter(|cells| cells.len() >= 3)
        .map(|cells| FOOTNOTE.replace_all(&cells[2], "").trim().to_string())
        .filter(|name| !name.is_empty() && !name.ends_with('†'))
        .collect();

    if names.is_empty() {
        return Err(ForgeError::NoNamesExtracted { what: "star names" });
    }
    Ok(names)
}

/// Constellations from the first cell of each row, distinct and sorted
pub fn extract_constellations(html: &str) -> Result<Vec<String>> {
    let names: BTreeSet<String> = html::table_rows(html, TABLE_CLASSES)
        .into_iter()
        .filter_map(|cells| cells.into_iter().next())
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        return Err(ForgeError::NoNamesExtracted {
            what: "constellation names",
        });
    }
    Ok(names.into_iter().collect())
}

/// Download a page as text
pub fn fetch_page(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(format!("starname-forge/{}", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .build()?;
    let response = client.get(url).send()?.error_for_status()?;
    Ok(response.text()?)
}

/// Write names as a pretty-printed JSON array with a trailing newline
pub fn write_catalogue(path: &Path, names: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut body = serde_json::to_string_pretty(names)?;
    body.push('\n');
    std::fs::write(path, body)?;
    Ok(())
}
