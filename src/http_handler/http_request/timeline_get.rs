use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType};
use super::timeline::TimelineResponse;

#[derive(Debug)]
pub struct TimelineRequest {}

impl NoBodyHTTPRequestType for TimelineRequest {}

impl HTTPRequestType for TimelineRequest {
    type Response = TimelineResponse;
    fn endpoint(&self) -> String { String::from("/data/satellites_timeline.json") }
}
