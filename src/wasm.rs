//! Browser bindings
//!
//! Exposes the generator to JavaScript with the camelCase surface
//! `init`, `randomStar`, `randomStarList`, `randomConstellation` and
//! `randomConstellationList`. On wasm32 the catalogues always come from
//! the embedded data, so `init` never touches the network.

use crate::core::{CatalogueId, GeneratorConfig, GeneratorError, SamplingRequest, StarNameGenerator};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static GENERATOR: RefCell<Option<StarNameGenerator>> = const { RefCell::new(None) };
}

fn to_js(err: GeneratorError) -> JsError {
    JsError::new(&err.to_string())
}

fn with_generator<T>(
    f: impl FnOnce(&mut StarNameGenerator) -> crate::core::Result<T>,
    operation: &'static str,
) -> Result<T, JsError> {
    GENERATOR.with(|cell| match cell.borrow_mut().as_mut() {
        Some(generator) => f(generator).map_err(to_js),
        None => Err(to_js(GeneratorError::NotInitialized { operation })),
    })
}

fn list(id: CatalogueId, count: f64, unique: Option<bool>) -> Result<JsValue, JsError> {
    let request = SamplingRequest::from_f64(count, unique.unwrap_or(true)).map_err(to_js)?;
    let operation = match id {
        CatalogueId::Stars => "randomStarList",
        CatalogueId::Constellations => "randomConstellationList",
    };
    let names = with_generator(|g| g.sample(id, request), operation)?;
    serde_wasm_bindgen::to_value(&names).map_err(|e| JsError::new(&e.to_string()))
}

/// Load both catalogues. Safe to call more than once.
#[wasm_bindgen]
pub fn init(seed: Option<u64>) -> Result<(), JsError> {
    GENERATOR.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            let config = GeneratorConfig {
                seed,
                ..Default::default()
            };
            let mut generator = StarNameGenerator::from_config(&config).map_err(to_js)?;
            generator.init().map_err(to_js)?;
            *slot = Some(generator);
        }
        Ok(())
    })
}

#[wasm_bindgen(js_name = randomStar)]
pub fn random_star() -> Result<String, JsError> {
    with_generator(|g| g.random_star(), "randomStar")
}

#[wasm_bindgen(js_name = randomStarList)]
pub fn random_star_list(count: f64, unique: Option<bool>) -> Result<JsValue, JsError> {
    list(CatalogueId::Stars, count, unique)
}

#[wasm_bindgen(js_name = randomConstellation)]
pub fn random_constellation() -> Result<String, JsError> {
    with_generator(|g| g.random_constellation(), "randomConstellation")
}

#[wasm_bindgen(js_name = randomConstellationList)]
pub fn random_constellation_list(count: f64, unique: Option<bool>) -> Result<JsValue, JsError> {
    list(CatalogueId::Constellations, count, unique)
}
