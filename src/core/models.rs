//! Data models for starname-generator
//!
//! Catalogue identity, loaded catalogues, sampling requests and configuration.

use crate::core::error::{GeneratorError, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable naming a directory holding the catalogue files
pub const ENV_DATA_DIR: &str = "STARNAME_DATA_DIR";
/// Environment variable naming a base URL serving the catalogue files
pub const ENV_BASE_URL: &str = "STARNAME_BASE_URL";
/// Environment variable holding a fixed RNG seed
pub const ENV_SEED: &str = "STARNAME_SEED";

/// The two name catalogues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogueId {
    /// IAU proper star names
    Stars,
    /// Constellations hosting a named star
    Constellations,
}

impl CatalogueId {
    /// Both catalogues, in load order
    pub const ALL: [CatalogueId; 2] = [CatalogueId::Stars, CatalogueId::Constellations];

    /// Well-known file name of the catalogue resource
    pub fn file_name(&self) -> &'static str {
        match self {
            CatalogueId::Stars => "starData.json",
            CatalogueId::Constellations => "constellationData.json",
        }
    }
}

impl fmt::Display for CatalogueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogueId::Stars => write!(f, "star"),
            CatalogueId::Constellations => write!(f, "constellation"),
        }
    }
}

/// A loaded, immutable catalogue of names.
///
/// Never empty and never holds an empty string. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCatalogue {
    id: CatalogueId,
    names: Vec<String>,
}

impl NameCatalogue {
    /// Build a catalogue, rejecting empty lists and empty names
    pub fn new(id: CatalogueId, names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(GeneratorError::malformed(id, "catalogue is empty"));
        }
        if let Some(pos) = names.iter().position(|n| n.trim().is_empty()) {
            return Err(GeneratorError::malformed(
                id,
                format!("entry {} is an empty name", pos),
            ));
        }
        Ok(Self { id, names })
    }

    pub fn id(&self) -> CatalogueId {
        self.id
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed catalogue
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Distinct-value pool, keeping the first occurrence of each name
    pub fn distinct(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.names.len());
        self.names
            .iter()
            .map(String::as_str)
            .filter(|n| seen.insert(*n))
            .collect()
    }

    /// Number of distinct names
    pub fn distinct_len(&self) -> usize {
        self.names.iter().collect::<HashSet<_>>().len()
    }
}

/// How many names to draw, and whether repeats are allowed.
///
/// `count` is always a positive integer once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingRequest {
    count: usize,
    unique: bool,
}

impl SamplingRequest {
    /// Validate a signed count
    pub fn new(count: i64, unique: bool) -> Result<Self> {
        if count < 1 {
            return Err(GeneratorError::invalid_count(count));
        }
        let count = usize::try_from(count).map_err(|_| GeneratorError::invalid_count(count))?;
        Ok(Self { count, unique })
    }

    /// Validate a floating point count (JavaScript numbers)
    pub fn from_f64(count: f64, unique: bool) -> Result<Self> {
        if !count.is_finite() || count.fract() != 0.0 || count < 1.0 || count > i64::MAX as f64 {
            return Err(GeneratorError::invalid_count(count));
        }
        Self::new(count as i64, unique)
    }

    /// Validate a textual count (command line)
    pub fn parse(count: &str, unique: bool) -> Result<Self> {
        let parsed: i64 = count
            .trim()
            .parse()
            .map_err(|_| GeneratorError::invalid_count(format!("{:?}", count)))?;
        Self::new(parsed, unique)
    }

    /// A single draw with repeats allowed
    pub fn one() -> Self {
        Self {
            count: 1,
            unique: false,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn unique(&self) -> bool {
        self.unique
    }
}

/// Runtime configuration.
///
/// Every field is optional; unset fields fall back to embedded catalogues
/// and an OS-seeded RNG.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory containing `starData.json` and `constellationData.json`
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Base URL serving the catalogue files (requires the `fetch` feature)
    #[serde(default)]
    pub base_url: Option<String>,
    /// Fixed RNG seed for reproducible draws
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(GeneratorError::from)
            .context(format!("reading config {}", path.display()))?;
        serde_json::from_str(&content)
            .map_err(GeneratorError::from)
            .context(format!("parsing config {}", path.display()))
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let seed = match non_empty(ENV_SEED) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                GeneratorError::invalid_config(format!("{} must be an unsigned integer, got {:?}", ENV_SEED, raw))
            })?),
            None => None,
        };

        Ok(Self {
            data_dir: non_empty(ENV_DATA_DIR).map(PathBuf::from),
            base_url: non_empty(ENV_BASE_URL),
            seed,
        })
    }

    /// Overlay `other` on top of `self`; fields set in `other` win
    pub fn merge(self, other: GeneratorConfig) -> Self {
        Self {
            data_dir: other.data_dir.or(self.data_dir),
            base_url: other.base_url.or(self.base_url),
            seed: other.seed.or(self.seed),
        }
    }
}
