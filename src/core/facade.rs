//! The generator façade
//!
//! [`StarNameGenerator`] owns a catalogue source, a random number generator
//! and the loaded catalogues. It starts Uninitialized; [`StarNameGenerator::init`]
//! loads both catalogues and moves it to Ready. Sampling before that fails
//! with [`GeneratorError::NotInitialized`].

use crate::core::error::{GeneratorError, Result, ResultExt};
use crate::core::loader::{detect_source, CatalogueSource, EmbeddedSource};
use crate::core::models::{CatalogueId, GeneratorConfig, NameCatalogue, SamplingRequest};
use crate::core::sampler;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Both catalogues, once loaded
#[derive(Debug, Clone)]
struct Catalogues {
    stars: NameCatalogue,
    constellations: NameCatalogue,
}

impl Catalogues {
    fn get(&self, id: CatalogueId) -> &NameCatalogue {
        match id {
            CatalogueId::Stars => &self.stars,
            CatalogueId::Constellations => &self.constellations,
        }
    }
}

#[derive(Debug, Clone)]
enum State {
    Uninitialized,
    Ready(Catalogues),
}

/// Random star and constellation names
pub struct StarNameGenerator {
    source: Box<dyn CatalogueSource>,
    rng: ChaCha8Rng,
    state: State,
}

impl Default for StarNameGenerator {
    fn default() -> Self {
        Self::new(Box::new(EmbeddedSource))
    }
}

impl StarNameGenerator {
    /// Create an uninitialized generator over `source`, seeded from the OS
    pub fn new(source: Box<dyn CatalogueSource>) -> Self {
        Self {
            source,
            rng: ChaCha8Rng::from_os_rng(),
            state: State::Uninitialized,
        }
    }

    /// Create an uninitialized generator from configuration
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let generator = Self::new(detect_source(config)?);
        Ok(match config.seed {
            Some(seed) => generator.with_seed(seed),
            None => generator,
        })
    }

    /// Replace the RNG with one seeded from `seed`
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Name of the catalogue source strategy in use
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// Load both catalogues. Calling this again once ready is a no-op.
    pub fn init(&mut self) -> Result<()> {
        if self.is_ready() {
            return Ok(());
        }
        let stars = self
            .source
            .load(CatalogueId::Stars)
            .context("loading star catalogue")?;
        let constellations = self
            .source
            .load(CatalogueId::Constellations)
            .context("loading constellation catalogue")?;
        debug!(
            source = self.source.name(),
            stars = stars.len(),
            constellations = constellations.len(),
            "generator ready"
        );
        self.state = State::Ready(Catalogues {
            stars,
            constellations,
        });
        Ok(())
    }

    /// The loaded star catalogue, if initialized
    pub fn star_names(&self) -> Option<&NameCatalogue> {
        self.catalogues().map(|c| &c.stars)
    }

    /// The loaded constellation catalogue, if initialized
    pub fn constellation_names(&self) -> Option<&NameCatalogue> {
        self.catalogues().map(|c| &c.constellations)
    }

    /// One random star name
    pub fn random_star(&mut self) -> Result<String> {
        self.draw_one(CatalogueId::Stars, "random_star")
    }

    /// `count` random star names; `unique` forbids repeats
    pub fn random_star_list(&mut self, count: i64, unique: bool) -> Result<Vec<String>> {
        self.draw_list(CatalogueId::Stars, count, unique, "random_star_list")
    }

    /// One random constellation name
    pub fn random_constellation(&mut self) -> Result<String> {
        self.draw_one(CatalogueId::Constellations, "random_constellation")
    }

    /// `count` random constellation names; `unique` forbids repeats
    pub fn random_constellation_list(&mut self, count: i64, unique: bool) -> Result<Vec<String>> {
        self.draw_list(
            CatalogueId::Constellations,
            count,
            unique,
            "random_constellation_list",
        )
    }

    /// Draw according to an already validated request
    pub fn sample(&mut self, id: CatalogueId, request: SamplingRequest) -> Result<Vec<String>> {
        let operation = match id {
            CatalogueId::Stars => "random_star_list",
            CatalogueId::Constellations => "random_constellation_list",
        };
        let catalogue = Self::ready(&self.state, operation)?.get(id);
        sampler::sample(catalogue, request, &mut self.rng)
    }

    fn draw_one(&mut self, id: CatalogueId, operation: &'static str) -> Result<String> {
        let catalogue = Self::ready(&self.state, operation)?.get(id);
        Ok(sampler::sample_one(catalogue, &mut self.rng))
    }

    fn draw_list(
        &mut self,
        id: CatalogueId,
        count: i64,
        unique: bool,
        operation: &'static str,
    ) -> Result<Vec<String>> {
        let catalogue = Self::ready(&self.state, operation)?.get(id);
        let request = SamplingRequest::new(count, unique)?;
        sampler::sample(catalogue, request, &mut self.rng)
    }

    fn catalogues(&self) -> Option<&Catalogues> {
        match &self.state {
            State::Ready(c) => Some(c),
            State::Uninitialized => None,
        }
    }

    // Takes the state field alone so the RNG can be borrowed mutably alongside.
    fn ready<'a>(state: &'a State, operation: &'static str) -> Result<&'a Catalogues> {
        match state {
            State::Ready(c) => Ok(c),
            State::Uninitialized => Err(GeneratorError::NotInitialized { operation }),
        }
    }
}
