use super::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug, Clone)]
#[serde(transparent)]
pub struct BudgetsResponse {
    entries: Vec<BudgetEntry>,
}

impl SerdeJSONBodyHTTPResponseType for BudgetsResponse {}

impl BudgetsResponse {
    pub fn entries(&self) -> &[BudgetEntry] { &self.entries }
    pub fn into_entries(self) -> Vec<BudgetEntry> { self.entries }
}

/// One national space budget, in billions of euros.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct BudgetEntry {
    country: String,
    budget: f64,
}

impl BudgetEntry {
    pub fn country(&self) -> &str { &self.country }
    pub fn budget(&self) -> f64 { self.budget }

    #[cfg(test)]
    pub fn test(country: &str, budget: f64) -> Self {
        Self { country: country.into(), budget }
    }
}
