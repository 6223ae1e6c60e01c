use super::orbit_class::DatasetEpoch;
use crate::http_handler::{
    http_client::HTTPClient,
    http_request::{
        request_common::NoBodyHTTPRequestType, satellite_dataset_get::SatelliteDatasetRequest,
    },
    http_response::{
        response_common::ResponseError,
        satellite_dataset::{CountryOrbitProfile, OrbitWeights},
    },
};
use crate::warn;
use strum_macros::Display;

#[derive(Debug, Display, PartialEq, Eq)]
pub enum GrowthError {
    /// The 1980s baseline count is zero, the relative growth is undefined.
    DivisionUndefined,
    /// The two profiles belong to different countries.
    CodeMismatch,
}

impl std::error::Error for GrowthError {}

/// Growth of one country's satellite count between the two dataset epochs,
/// shown in the country overlay.
#[derive(Debug, Clone)]
pub struct CountryGrowth {
    name: String,
    count_eighties: u32,
    count_today: u32,
    delta: i64,
    delta_percent: f64,
    orbits_today: OrbitWeights,
}

impl CountryGrowth {
    /// Compares the same country across both epochs.
    ///
    /// A zero baseline is reported as [`GrowthError::DivisionUndefined`]
    /// instead of producing an infinite or NaN percentage.
    pub fn between(
        eighties: &CountryOrbitProfile,
        today: &CountryOrbitProfile,
    ) -> Result<CountryGrowth, GrowthError> {
        if eighties.code() != today.code() {
            return Err(GrowthError::CodeMismatch);
        }
        if eighties.count() == 0 {
            return Err(GrowthError::DivisionUndefined);
        }
        let delta = i64::from(today.count()) - i64::from(eighties.count());
        #[allow(clippy::cast_precision_loss)]
        let delta_percent =
            (delta as f64 / f64::from(eighties.count()) * 100.0 * 10.0).round() / 10.0;
        Ok(CountryGrowth {
            name: today.name().to_string(),
            count_eighties: eighties.count(),
            count_today: today.count(),
            delta,
            delta_percent,
            orbits_today: *today.orbits(),
        })
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn count_eighties(&self) -> u32 { self.count_eighties }
    pub fn count_today(&self) -> u32 { self.count_today }
    pub fn delta(&self) -> i64 { self.delta }
    /// Relative growth in percent, rounded to one decimal.
    pub fn delta_percent(&self) -> f64 { self.delta_percent }
    pub fn orbits_today(&self) -> &OrbitWeights { &self.orbits_today }

    pub fn summary(&self) -> String {
        format!(
            "{}: {} (1980s) to {} (today), growth {} ({}%)",
            self.name, self.count_eighties, self.count_today, self.delta, self.delta_percent
        )
    }
}

/// Fetches both epoch snapshots and computes the growth overlay data for one
/// country. Returns `Ok(None)` when the country is missing from either epoch
/// or the comparison itself is undefined, matching the overlay's skip
/// behavior.
pub async fn fetch_country_growth(
    client: &HTTPClient,
    code: &str,
) -> Result<Option<CountryGrowth>, ResponseError> {
    let today = SatelliteDatasetRequest::new(DatasetEpoch::Today).send_request(client).await?;
    let eighties =
        SatelliteDatasetRequest::new(DatasetEpoch::Eighties).send_request(client).await?;

    let (Some(profile_today), Some(profile_eighties)) = (today.find(code), eighties.find(code))
    else {
        return Ok(None);
    };
    match CountryGrowth::between(profile_eighties, profile_today) {
        Ok(growth) => Ok(Some(growth)),
        Err(e) => {
            warn!("growth comparison for {code} skipped: {e}");
            Ok(None)
        }
    }
}
