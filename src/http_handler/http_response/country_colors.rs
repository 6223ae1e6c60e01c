use super::response_common::SerdeJSONBodyHTTPResponseType;
use std::collections::HashMap;

/// Country code to display color (`"#rrggbb"`) mapping.
#[derive(serde::Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct CountryColorsResponse {
    colors: HashMap<String, String>,
}

impl SerdeJSONBodyHTTPResponseType for CountryColorsResponse {}

impl CountryColorsResponse {
    pub fn hex_for(&self, code: &str) -> Option<&str> {
        self.colors.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize { self.colors.len() }
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    #[cfg(test)]
    pub fn test(pairs: &[(&str, &str)]) -> Self {
        Self {
            colors: pairs.iter().map(|(c, h)| ((*c).to_string(), (*h).to_string())).collect(),
        }
    }
}
