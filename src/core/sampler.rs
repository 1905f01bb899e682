//! Random draws from a catalogue
//!
//! Repeat-allowed draws pick indices independently from the full
//! catalogue. Unique draws collapse duplicates into the distinct-value pool
//! first, then run a partial Fisher–Yates shuffle over it, which yields a
//! uniformly random ordered subset without repeats.

use crate::core::error::{GeneratorError, Result};
use crate::core::models::{NameCatalogue, SamplingRequest};
use rand::Rng;

/// Draw `request.count()` names from `catalogue`
pub fn sample<R: Rng + ?Sized>(
    catalogue: &NameCatalogue,
    request: SamplingRequest,
    rng: &mut R,
) -> Result<Vec<String>> {
    if !request.unique() {
        let names = catalogue.names();
        let mut out = Vec::new();
        out.try_reserve_exact(request.count())
            .map_err(|_| GeneratorError::CountTooLarge {
                catalogue: catalogue.id(),
                requested: request.count(),
            })?;
        out.extend((0..request.count()).map(|_| names[rng.random_range(0..names.len())].clone()));
        return Ok(out);
    }

    let mut pool = catalogue.distinct();
    if request.count() > pool.len() {
        return Err(GeneratorError::NotEnoughNames {
            catalogue: catalogue.id(),
            requested: request.count(),
            available: pool.len(),
        });
    }

    partial_shuffle(&mut pool, request.count(), rng);
    Ok(pool[..request.count()].iter().map(|s| s.to_string()).collect())
}

/// Draw a single name, repeats allowed
pub fn sample_one<R: Rng + ?Sized>(catalogue: &NameCatalogue, rng: &mut R) -> String {
    let names = catalogue.names();
    names[rng.random_range(0..names.len())].clone()
}

/// Move a uniform random `count`-subset of `items` to the front, in random order.
///
/// Position `i` swaps with a uniform pick from `i..len`, so each prefix
/// element is drawn from what remains, exactly as removing it would.
fn partial_shuffle<T, R: Rng + ?Sized>(items: &mut [T], count: usize, rng: &mut R) {
    let len = items.len();
    for i in 0..count.min(len) {
        let j = rng.random_range(i..len);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::core::models::CatalogueId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::{HashMap, HashSet};

    fn catalogue(names: &[&str]) -> NameCatalogue {
        NameCatalogue::new(
            CatalogueId::Stars,
            names.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap()
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_unique_draw_of_whole_pool_is_permutation() {
        let cat = catalogue(&["Sirius", "Vega", "Rigel"]);
        let mut rng = rng();
        for _ in 0..20 {
            let out = sample(&cat, SamplingRequest::new(3, true).unwrap(), &mut rng).unwrap();
            let mut sorted = out.clone();
            sorted.sort();
            assert_eq!(sorted, vec!["Rigel", "Sirius", "Vega"]);
        }
    }

    #[test]
    fn test_unique_draw_beyond_pool_fails() {
        let cat = catalogue(&["Sirius", "Vega", "Rigel"]);
        let err = sample(&cat, SamplingRequest::new(4, true).unwrap(), &mut rng()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(err.to_string().contains("4 requested, 3 available"));
    }

    #[test]
    fn test_unique_draw_collapses_duplicates() {
        let cat = catalogue(&["Vega", "Vega", "Rigel", "Vega"]);
        let mut rng = rng();

        let out = sample(&cat, SamplingRequest::new(2, true).unwrap(), &mut rng).unwrap();
        let set: HashSet<_> = out.iter().collect();
        assert_eq!(set.len(), 2);

        let err = sample(&cat, SamplingRequest::new(3, true).unwrap(), &mut rng).unwrap_err();
        assert!(err.to_string().contains("3 requested, 2 available"));
    }

    #[test]
    fn test_repeat_draw_may_exceed_pool() {
        let cat = catalogue(&["Sirius", "Vega"]);
        let out = sample(&cat, SamplingRequest::new(50, false).unwrap(), &mut rng()).unwrap();
        assert_eq!(out.len(), 50);
        assert!(out.iter().all(|n| cat.contains(n)));
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for name in &out {
            *counts.entry(name.as_str()).or_default() += 1;
        }
        assert!(counts.values().any(|&c| c > 1));
    }

    #[test]
    fn test_repeat_draw_too_large_is_an_error() {
        let cat = catalogue(&["Sirius", "Vega"]);
        let req = SamplingRequest::new(i64::MAX, false).unwrap();
        let err = sample(&cat, req, &mut rng()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(matches!(err, GeneratorError::CountTooLarge { .. }));
    }

    #[test]
    fn test_sample_one_is_member() {
        let cat = catalogue(&["Sirius", "Vega", "Rigel"]);
        let mut rng = rng();
        for _ in 0..50 {
            assert!(cat.contains(&sample_one(&cat, &mut rng)));
        }
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let cat = catalogue(&["A", "B", "C", "D", "E", "F", "G", "H"]);
        let req = SamplingRequest::new(5, true).unwrap();
        let a = sample(&cat, req, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        let b = sample(&cat, req, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unique_draw_is_roughly_uniform() {
        let cat = catalogue(&["A", "B", "C", "D"]);
        let req = SamplingRequest::new(1, true).unwrap();
        let mut rng = rng();
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..4000 {
            let out = sample(&cat, req, &mut rng).unwrap();
            *counts.entry(out[0].clone()).or_default() += 1;
        }
        for name in ["A", "B", "C", "D"] {
            let seen = counts.get(name).copied().unwrap_or(0);
            assert!(
                (800..1200).contains(&seen),
                "{} drawn {} times out of 4000",
                name,
                seen
            );
        }
    }

    #[test]
    fn test_partial_shuffle_keeps_elements() {
        let mut items = vec![1, 2, 3, 4, 5, 6];
        partial_shuffle(&mut items, 3, &mut rng());
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6]);
    }
}
