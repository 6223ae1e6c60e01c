use super::super::http_client::HTTPClient;
use super::super::http_response::response_common::{HTTPResponseType, ResponseError};

pub(crate) trait HTTPRequestType {
    type Response: HTTPResponseType;

    /// Document path relative to the client's base URL.
    fn endpoint(&self) -> String;

    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::default()
    }
}

/// GET requests without a request body. All static document fetches in this
/// crate are of this kind.
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, ResponseError> {
        let response = client
            .client()
            .get(format!("{}{}", client.url(), self.endpoint()))
            .headers(self.header_params())
            .send()
            .await?;
        Self::Response::read_response(response).await
    }
}
