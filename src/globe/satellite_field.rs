use super::orbit_class::OrbitClass;
use super::sampler::{RandomSource, sample_orbits};
use crate::http_handler::http_response::{
    country_colors::CountryColorsResponse, satellite_dataset::SatelliteDataset,
};
use crate::warn;
use itertools::Itertools;
use std::f64::consts::PI;
use strum::IntoEnumIterator;

/// Weight-sum slack beyond which a country's orbit distribution is reported
/// as inconsistent.
const WEIGHT_SLACK_TOL: f64 = 0.01;

/// Linear RGB color in `[0, 1]` per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    r: f32,
    g: f32,
    b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 1.0, g: 1.0, b: 1.0 };

    /// Parses a `"#rrggbb"` hex string.
    pub fn parse(hex: &str) -> Option<Rgb> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).ok().map(|v| f32::from(v) / 255.0)
        };
        Some(Rgb { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    }

    /// Uniformly scaled copy, used to dim non-highlighted countries.
    pub fn scaled(self, factor: f32) -> Rgb {
        Rgb { r: self.r * factor, g: self.g * factor, b: self.b * factor }
    }
}

/// One placed satellite instance.
#[derive(Debug, Clone)]
pub struct SatelliteInstance {
    country_idx: usize,
    orbit: OrbitClass,
    position: [f64; 3],
}

impl SatelliteInstance {
    pub fn orbit(&self) -> OrbitClass { self.orbit }
    pub fn position(&self) -> [f64; 3] { self.position }
}

/// Legend row for one country, in dataset order.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    code: String,
    name: String,
    count: u32,
    color: Rgb,
}

impl LegendEntry {
    pub fn code(&self) -> &str { &self.code }
    pub fn name(&self) -> &str { &self.name }
    pub fn count(&self) -> u32 { self.count }
    pub fn color(&self) -> Rgb { self.color }
}

/// The instanced satellite buffer of the globe scene: positions are fixed at
/// populate time, per-instance colors are recomputed on highlight changes.
///
/// This owns all per-unit placement state. An epoch switch builds a fresh
/// field and drops the old one, there is no merging of assignments.
#[derive(Debug, Default)]
pub struct SatelliteField {
    instances: Vec<SatelliteInstance>,
    legend: Vec<LegendEntry>,
    colors: Vec<Rgb>,
}

impl SatelliteField {
    /// Factor applied to the colors of countries outside the highlight.
    const DIM_FACTOR: f32 = 0.2;

    /// Samples orbit classes and sphere positions for every unit of every
    /// country in the dataset.
    pub fn populate<R: RandomSource>(
        dataset: &SatelliteDataset,
        palette: &CountryColorsResponse,
        rng: &mut R,
    ) -> Self {
        if dataset.counted_total() != dataset.total() {
            warn!(
                "dataset declares {} satellites but country counts sum to {}",
                dataset.total(),
                dataset.counted_total()
            );
        }

        let mut field = SatelliteField::default();
        for (idx, country) in dataset.countries().iter().enumerate() {
            let slack = country.orbits().consistency_slack();
            if slack > WEIGHT_SLACK_TOL {
                warn!(
                    "orbit weights for {} deviate from 1.0 by {slack:.3}, GEO absorbs the remainder",
                    country.code()
                );
            }
            let color = palette.hex_for(country.code()).and_then(Rgb::parse).unwrap_or_else(|| {
                warn!("no display color for {}, falling back to white", country.code());
                Rgb::WHITE
            });

            for orbit in sample_orbits(country.orbits(), country.count(), rng) {
                let theta = rng.next_f64() * PI * 2.0;
                let phi = rng.next_f64() * PI;
                field.instances.push(SatelliteInstance {
                    country_idx: idx,
                    orbit,
                    position: spherical_pos(orbit.shell_radius(), phi, theta),
                });
                field.colors.push(color);
            }
            field.legend.push(LegendEntry {
                code: country.code().to_string(),
                name: country.name().to_string(),
                count: country.count(),
                color,
            });
        }
        field
    }

    pub fn len(&self) -> usize { self.instances.len() }
    pub fn is_empty(&self) -> bool { self.instances.is_empty() }
    pub fn instances(&self) -> &[SatelliteInstance] { &self.instances }
    pub fn legend(&self) -> &[LegendEntry] { &self.legend }
    pub fn colors(&self) -> &[Rgb] { &self.colors }

    /// Recomputes per-instance colors for a highlight on `code`, dimming all
    /// other countries. `None` restores every country to its base color.
    /// Idempotent, always derived from the legend base colors.
    pub fn highlight(&mut self, code: Option<&str>) {
        for (instance, slot) in self.instances.iter().zip(self.colors.iter_mut()) {
            let entry = &self.legend[instance.country_idx];
            let dimmed = code.is_some_and(|c| c != entry.code);
            *slot = if dimmed { entry.color.scaled(Self::DIM_FACTOR) } else { entry.color };
        }
    }

    /// Per-class instance totals in fixed class order, for log output.
    pub fn orbit_census(&self) -> String {
        let counts = self.instances.iter().map(SatelliteInstance::orbit).counts();
        OrbitClass::iter()
            .map(|class| format!("{class}: {}", counts.get(&class).copied().unwrap_or(0)))
            .join(", ")
    }
}

/// Spherical to cartesian, three.js `setFromSphericalCoords` convention.
fn spherical_pos(radius: f64, phi: f64, theta: f64) -> [f64; 3] {
    [
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
        radius * phi.sin() * theta.cos(),
    ]
}
