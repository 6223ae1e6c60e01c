mod country_detail;
mod orbit_class;
mod sampler;
mod satellite_field;
mod scene;
#[cfg(test)]
mod tests;

pub use country_detail::{CountryGrowth, GrowthError, fetch_country_growth};
pub use orbit_class::{DatasetEpoch, GLOBE_RADIUS, OrbitClass};
pub use sampler::{RandomSource, ThreadRandom, sample_orbits};
pub use satellite_field::{LegendEntry, Rgb, SatelliteField, SatelliteInstance};
pub use scene::GlobeScene;
