use crate::http_handler::{
    http_client::HTTPClient,
    http_request::{request_common::NoBodyHTTPRequestType, timeline_get::TimelineRequest},
    http_response::{response_common::ResponseError, timeline::TimelineYearGroup},
};

/// Rendered milestone timeline: year labels interleaved with milestone rows,
/// in document order.
#[derive(Debug, Default)]
pub struct TimelinePanel {
    entries: Vec<String>,
}

impl TimelinePanel {
    pub async fn load(client: &HTTPClient) -> Result<TimelinePanel, ResponseError> {
        let response = TimelineRequest {}.send_request(client).await?;
        Ok(Self::render(response.groups()))
    }

    pub fn render(groups: &[TimelineYearGroup]) -> TimelinePanel {
        let mut entries = Vec::new();
        for group in groups {
            entries.push(format!("== {} ==", group.year()));
            for item in group.items() {
                entries.push(format!("{} ({}): {}", item.name(), item.agency(), item.desc()));
            }
        }
        TimelinePanel { entries }
    }

    pub fn offline() -> TimelinePanel { TimelinePanel::default() }

    pub fn entries(&self) -> &[String] { &self.entries }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
