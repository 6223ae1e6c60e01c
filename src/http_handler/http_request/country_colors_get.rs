use super::country_colors::CountryColorsResponse;
use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct CountryColorsRequest {}

impl NoBodyHTTPRequestType for CountryColorsRequest {}

impl HTTPRequestType for CountryColorsRequest {
    type Response = CountryColorsResponse;
    fn endpoint(&self) -> String { String::from("/data/country_colors.json") }
}
