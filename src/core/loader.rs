//! Catalogue loading
//!
//! This module provides the [`CatalogueSource`] trait and the strategies
//! implementing it. All of them hand raw JSON text to [`parse_catalogue`],
//! so every strategy accepts and rejects exactly the same documents.
//!
//! - [`EmbeddedSource`]: catalogues compiled into the binary (all targets)
//! - [`DirectorySource`]: catalogue files read from a local directory
//! - `HttpSource`: catalogue files fetched from a base URL (`fetch` feature)

use crate::core::error::{GeneratorError, Result, ResultExt};
use crate::core::models::{CatalogueId, GeneratorConfig, NameCatalogue};
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

#[cfg(test)]
use mockall::automock;

const EMBEDDED_STARS: &str = include_str!("../../data/starData.json");
const EMBEDDED_CONSTELLATIONS: &str = include_str!("../../data/constellationData.json");

/// A place catalogues can be loaded from
#[cfg_attr(test, automock)]
pub trait CatalogueSource: Send + Sync {
    /// Short strategy name, used in logs
    fn name(&self) -> &'static str;

    /// Fetch the raw JSON document for a catalogue
    fn read(&self, id: CatalogueId) -> Result<String>;

    /// Fetch and decode a catalogue
    fn load(&self, id: CatalogueId) -> Result<NameCatalogue> {
        let raw = self.read(id)?;
        let catalogue = parse_catalogue(id, &raw)?;
        debug!(source = self.name(), catalogue = %id, names = catalogue.len(), "catalogue loaded");
        Ok(catalogue)
    }
}

/// Decode a JSON document into a catalogue.
///
/// The document must be a non-empty array of non-empty strings.
pub fn parse_catalogue(id: CatalogueId, raw: &str) -> Result<NameCatalogue> {
    let value: Value = serde_json::from_str(raw)
        .map_err(GeneratorError::from)
        .context(format!("decoding {} catalogue", id))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(GeneratorError::malformed(
                id,
                format!("expected a JSON array, found {}", json_type(&other)),
            ))
        }
    };

    let names = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s),
            other => Err(GeneratorError::malformed(
                id,
                format!("entry {} is {}, expected a string", i, json_type(&other)),
            )),
        })
        .collect::<Result<Vec<_>>>()?;

    NameCatalogue::new(id, names)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Catalogues compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedSource;

impl CatalogueSource for EmbeddedSource {
    fn name(&self) -> &'static str {
        "embedded"
    }

    fn read(&self, id: CatalogueId) -> Result<String> {
        Ok(match id {
            CatalogueId::Stars => EMBEDDED_STARS,
            CatalogueId::Constellations => EMBEDDED_CONSTELLATIONS,
        }
        .to_string())
    }
}

/// Catalogue files in a local directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Full path of a catalogue file
    pub fn path_for(&self, id: CatalogueId) -> PathBuf {
        self.root.join(id.file_name())
    }
}

impl CatalogueSource for DirectorySource {
    fn name(&self) -> &'static str {
        "directory"
    }

    fn read(&self, id: CatalogueId) -> Result<String> {
        let path = self.path_for(id);
        if !path.is_file() {
            return Err(GeneratorError::CatalogueNotFound {
                location: path.display().to_string(),
            });
        }
        std::fs::read_to_string(&path)
            .map_err(GeneratorError::from)
            .context(format!("reading {}", path.display()))
    }
}

/// Catalogue files served over HTTP
#[cfg(all(feature = "fetch", not(target_arch = "wasm32")))]
#[derive(Debug)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[cfg(all(feature = "fetch", not(target_arch = "wasm32")))]
fn http_error(err: reqwest::Error) -> GeneratorError {
    GeneratorError::Http {
        message: err.to_string(),
    }
}

#[cfg(all(feature = "fetch", not(target_arch = "wasm32")))]
impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(format!("starname-generator/{}", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(http_error)?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Full URL of a catalogue file
    pub fn url_for(&self, id: CatalogueId) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), id.file_name())
    }
}

#[cfg(all(feature = "fetch", not(target_arch = "wasm32")))]
impl CatalogueSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    fn read(&self, id: CatalogueId) -> Result<String> {
        let url = self.url_for(id);
        let response = self.client.get(&url).send().map_err(http_error)?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(GeneratorError::CatalogueNotFound { location: url });
        }
        response
            .error_for_status()
            .and_then(|r| r.text())
            .map_err(http_error)
            .context(format!("fetching {}", url))
    }
}

/// Pick the catalogue source this environment supports.
///
/// wasm32 has neither a filesystem nor blocking HTTP, so it always reads
/// the embedded catalogues. Natively a configured base URL wins over a
/// configured directory, and the embedded catalogues are the fallback.
pub fn detect_source(config: &GeneratorConfig) -> Result<Box<dyn CatalogueSource>> {
    if cfg!(target_arch = "wasm32") {
        debug!(source = "embedded", "wasm32 target, using embedded catalogues");
        return Ok(Box::new(EmbeddedSource));
    }

    if let Some(url) = &config.base_url {
        return http_source(url);
    }

    if let Some(dir) = &config.data_dir {
        debug!(source = "directory", dir = %dir.display(), "using catalogue directory");
        return Ok(Box::new(DirectorySource::new(dir.clone())));
    }

    debug!(source = "embedded", "no catalogue location configured");
    Ok(Box::new(EmbeddedSource))
}

#[cfg(all(feature = "fetch", not(target_arch = "wasm32")))]
fn http_source(url: &str) -> Result<Box<dyn CatalogueSource>> {
    debug!(source = "http", url, "using catalogue base URL");
    Ok(Box::new(HttpSource::new(url)?))
}

#[cfg(not(all(feature = "fetch", not(target_arch = "wasm32"))))]
fn http_source(url: &str) -> Result<Box<dyn CatalogueSource>> {
    Err(GeneratorError::invalid_config(format!(
        "base URL {} configured, but this build has no network support (enable the `fetch` feature)",
        url
    )))
}
