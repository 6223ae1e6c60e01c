use super::astronauts::AstronautsResponse;
use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct AstronautsRequest {}

impl NoBodyHTTPRequestType for AstronautsRequest {}

impl HTTPRequestType for AstronautsRequest {
    type Response = AstronautsResponse;
    fn endpoint(&self) -> String { String::from("/data/astronauts.json") }
}
