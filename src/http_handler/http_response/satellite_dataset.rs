use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::globe::OrbitClass;

/// One dataset epoch snapshot: the declared grand total plus the per-country
/// satellite profiles it is made of.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct SatelliteDataset {
    total: u32,
    countries: Vec<CountryOrbitProfile>,
}

impl SerdeJSONBodyHTTPResponseType for SatelliteDataset {}

impl SatelliteDataset {
    pub fn total(&self) -> u32 { self.total }
    pub fn countries(&self) -> &[CountryOrbitProfile] { &self.countries }

    /// Sum of the per-country counts, which should equal `total` for a
    /// consistent dataset.
    pub fn counted_total(&self) -> u32 {
        self.countries.iter().map(CountryOrbitProfile::count).sum()
    }

    pub fn find(&self, code: &str) -> Option<&CountryOrbitProfile> {
        self.countries.iter().find(|c| c.code() == code)
    }

    #[cfg(test)]
    pub fn test(total: u32, countries: Vec<CountryOrbitProfile>) -> Self {
        Self { total, countries }
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct CountryOrbitProfile {
    code: String,
    name: String,
    count: u32,
    orbits: OrbitWeights,
}

impl CountryOrbitProfile {
    pub fn code(&self) -> &str { &self.code }
    pub fn name(&self) -> &str { &self.name }
    pub fn count(&self) -> u32 { self.count }
    pub fn orbits(&self) -> &OrbitWeights { &self.orbits }

    #[cfg(test)]
    pub fn test(code: &str, name: &str, count: u32, orbits: OrbitWeights) -> Self {
        Self { code: code.into(), name: name.into(), count, orbits }
    }
}

/// Fractional distribution of a country's satellites across the three orbit
/// classes. Intended to sum to 1.0; this is not enforced on deserialization,
/// consumers decide how to treat slack (see `consistency_slack`).
#[derive(serde::Deserialize, Debug, Clone, Copy)]
pub struct OrbitWeights {
    #[serde(rename = "LEO")]
    leo: f64,
    #[serde(rename = "MEO")]
    meo: f64,
    #[serde(rename = "GEO")]
    geo: f64,
}

impl OrbitWeights {
    pub fn new(leo: f64, meo: f64, geo: f64) -> Self { Self { leo, meo, geo } }

    pub fn leo(&self) -> f64 { self.leo }
    pub fn meo(&self) -> f64 { self.meo }
    pub fn geo(&self) -> f64 { self.geo }

    pub fn share_of(&self, class: OrbitClass) -> f64 {
        match class {
            OrbitClass::Leo => self.leo,
            OrbitClass::Meo => self.meo,
            OrbitClass::Geo => self.geo,
        }
    }

    /// Rounded percentage of one class, as shown in the country overlay.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent_of(&self, class: OrbitClass) -> u32 {
        (self.share_of(class) * 100.0).round() as u32
    }

    /// Absolute deviation of the weight sum from 1.0.
    pub fn consistency_slack(&self) -> f64 { (self.leo + self.meo + self.geo - 1.0).abs() }
}
