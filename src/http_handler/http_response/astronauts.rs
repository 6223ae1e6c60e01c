use super::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug, Clone)]
#[serde(transparent)]
pub struct AstronautsResponse {
    records: Vec<AstronautRecord>,
}

impl SerdeJSONBodyHTTPResponseType for AstronautsResponse {}

impl AstronautsResponse {
    pub fn records(&self) -> &[AstronautRecord] { &self.records }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AstronautRecord {
    name: String,
    agency: String,
    year: u16,
}

impl AstronautRecord {
    pub fn name(&self) -> &str { &self.name }
    pub fn agency(&self) -> &str { &self.agency }
    pub fn year(&self) -> u16 { self.year }
}
