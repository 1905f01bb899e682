//! Core module for starname-generator
//!
//! # Architecture
//!
//! - `models`: Catalogue identity, loaded catalogues, requests, configuration
//! - `error`: Error types using thiserror
//! - `loader`: CatalogueSource trait, loading strategies and capability detection
//! - `sampler`: Repeat-allowed and unique draws
//! - `facade`: StarNameGenerator, the Uninitialized/Ready state machine

pub mod error;
pub mod facade;
pub mod loader;
pub mod models;
pub mod sampler;

// Re-export commonly used types
pub use error::{ErrorKind, GeneratorError, Result, ResultExt};
pub use facade::StarNameGenerator;
pub use loader::{detect_source, parse_catalogue, CatalogueSource, DirectorySource, EmbeddedSource};
#[cfg(all(feature = "fetch", not(target_arch = "wasm32")))]
pub use loader::HttpSource;
pub use models::{
    CatalogueId, GeneratorConfig, NameCatalogue, SamplingRequest, ENV_BASE_URL, ENV_DATA_DIR,
    ENV_SEED,
};
pub use sampler::{sample, sample_one};
