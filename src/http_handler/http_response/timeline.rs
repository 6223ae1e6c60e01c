use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Milestone timeline, grouped by year as served in
/// `satellites_timeline.json`.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(transparent)]
pub struct TimelineResponse {
    groups: Vec<TimelineYearGroup>,
}

impl SerdeJSONBodyHTTPResponseType for TimelineResponse {}

impl TimelineResponse {
    pub fn groups(&self) -> &[TimelineYearGroup] { &self.groups }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct TimelineYearGroup {
    year: u16,
    items: Vec<TimelineItem>,
}

impl TimelineYearGroup {
    pub fn year(&self) -> u16 { self.year }
    pub fn items(&self) -> &[TimelineItem] { &self.items }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct TimelineItem {
    name: String,
    agency: String,
    desc: String,
}

impl TimelineItem {
    pub fn name(&self) -> &str { &self.name }
    pub fn agency(&self) -> &str { &self.agency }
    pub fn desc(&self) -> &str { &self.desc }
}
