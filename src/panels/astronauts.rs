use crate::http_handler::{
    http_client::HTTPClient,
    http_request::{astronauts_get::AstronautsRequest, request_common::NoBodyHTTPRequestType},
    http_response::{astronauts::AstronautRecord, response_common::ResponseError},
};

/// Rendered astronaut record list.
#[derive(Debug, Default)]
pub struct AstronautPanel {
    entries: Vec<String>,
}

impl AstronautPanel {
    pub async fn load(client: &HTTPClient) -> Result<AstronautPanel, ResponseError> {
        let response = AstronautsRequest {}.send_request(client).await?;
        Ok(Self::render(response.records()))
    }

    pub fn render(records: &[AstronautRecord]) -> AstronautPanel {
        let entries = records
            .iter()
            .map(|r| format!("{}, {} ({})", r.name(), r.agency(), r.year()))
            .collect();
        AstronautPanel { entries }
    }

    pub fn offline() -> AstronautPanel { AstronautPanel::default() }

    pub fn entries(&self) -> &[String] { &self.entries }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
