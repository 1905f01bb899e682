//! starname-generator - Random star and constellation names
//!
//! This library draws names from two static catalogues: IAU proper star
//! names and the constellations hosting them. It is designed to be consumed by:
//! - The CLI binary (src/bin/starname_gen.rs)
//! - Browsers, through the `wasm` feature bindings
//! - Other Rust code, through [`StarNameGenerator`]
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **lib.rs** (this file): Pure logic, no CLI concerns
//! - **bin/starname_gen.rs**: Thin wrapper that calls the library
//!
//! # Example
//!
//! ```
//! use starname_generator::StarNameGenerator;
//!
//! let mut generator = StarNameGenerator::default();
//! generator.init().unwrap();
//!
//! let star = generator.random_star().unwrap();
//! assert!(!star.is_empty());
//!
//! let crew = generator.random_star_list(5, true).unwrap();
//! assert_eq!(crew.len(), 5);
//! ```

pub mod core;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::{
    CatalogueId, CatalogueSource, DirectorySource, EmbeddedSource, ErrorKind, GeneratorConfig,
    GeneratorError, NameCatalogue, Result, SamplingRequest, StarNameGenerator,
};
#[cfg(all(feature = "fetch", not(target_arch = "wasm32")))]
pub use crate::core::HttpSource;

/// Library version, from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the version of the starname-generator library
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_default_generator_round() {
        let mut generator = StarNameGenerator::default();
        generator.init().unwrap();
        let star = generator.random_star().unwrap();
        assert!(generator.star_names().unwrap().contains(&star));
    }
}
