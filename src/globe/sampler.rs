use super::orbit_class::OrbitClass;
use crate::http_handler::http_response::satellite_dataset::OrbitWeights;
use rand::Rng;

/// Source of uniform random values in `[0, 1)`.
///
/// Production code uses [`ThreadRandom`]; tests inject scripted sequences so
/// sampling becomes fully reproducible.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Unseeded source backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 { rand::rng().random() }
}

/// Assigns `count` satellite units to orbit classes by cumulative-threshold
/// lookup over the country's fractional weights, in fixed order
/// LEO, then MEO, then GEO.
///
/// GEO absorbs all remaining probability mass, so weights that do not sum to
/// exactly 1.0 still classify every draw. Weights outside `[0, 1]` are a
/// caller error and are not validated here.
pub fn sample_orbits<R: RandomSource>(
    weights: &OrbitWeights,
    count: u32,
    rng: &mut R,
) -> Vec<OrbitClass> {
    (0..count).map(|_| pick_orbit(weights, rng.next_f64())).collect()
}

fn pick_orbit(weights: &OrbitWeights, r: f64) -> OrbitClass {
    if r < weights.leo() {
        OrbitClass::Leo
    } else if r < weights.leo() + weights.meo() {
        OrbitClass::Meo
    } else {
        OrbitClass::Geo
    }
}
