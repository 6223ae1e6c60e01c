use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType};
use super::satellite_dataset::SatelliteDataset;
use crate::globe::DatasetEpoch;

/// Fetches the satellite dataset snapshot for one epoch
/// (`satellites_1980s.json` / `satellites_today.json`).
#[derive(Debug)]
pub struct SatelliteDatasetRequest {
    epoch: DatasetEpoch,
}

impl SatelliteDatasetRequest {
    pub fn new(epoch: DatasetEpoch) -> Self { Self { epoch } }
}

impl NoBodyHTTPRequestType for SatelliteDatasetRequest {}

impl HTTPRequestType for SatelliteDatasetRequest {
    type Response = SatelliteDataset;
    fn endpoint(&self) -> String { format!("/data/satellites_{}.json", self.epoch) }
}
