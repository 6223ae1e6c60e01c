use crate::http_handler::{
    http_client::HTTPClient,
    http_request::{budgets_get::BudgetsRequest, request_common::NoBodyHTTPRequestType},
    http_response::{budgets::BudgetEntry, response_common::ResponseError},
};

/// Budget board scene: national space budgets plus the planet scale factor
/// derived from each entry relative to the largest budget.
#[derive(Debug, Default)]
pub struct BudgetBoard {
    entries: Vec<BudgetEntry>,
    max_budget: f64,
}

impl BudgetBoard {
    const BASE_SCALE: f64 = 1.0;
    const SCALE_SPAN: f64 = 5.0;

    pub async fn load(client: &HTTPClient) -> Result<BudgetBoard, ResponseError> {
        let response = BudgetsRequest {}.send_request(client).await?;
        Ok(Self::from_entries(response.into_entries()))
    }

    pub fn from_entries(entries: Vec<BudgetEntry>) -> BudgetBoard {
        let max_budget = entries.iter().map(BudgetEntry::budget).fold(0.0, f64::max);
        BudgetBoard { entries, max_budget }
    }

    /// Empty board, the fail-open fallback when the fetch fails.
    pub fn offline() -> BudgetBoard { BudgetBoard::default() }

    pub fn entries(&self) -> &[BudgetEntry] { &self.entries }
    pub fn max_budget(&self) -> f64 { self.max_budget }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Planet scale for one budget: 1.0 at zero, up to 6.0 for the largest
    /// budget on the board.
    pub fn scale_for(&self, budget: f64) -> f64 {
        if self.max_budget <= 0.0 {
            Self::BASE_SCALE
        } else {
            Self::BASE_SCALE + budget / self.max_budget * Self::SCALE_SPAN
        }
    }

    /// Display rows, one per country.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| format!("{}: {:.1} bn EUR", e.country(), e.budget()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_handler::http_response::budgets::BudgetEntry;

    #[test]
    fn scale_is_relative_to_largest_budget() {
        let board = BudgetBoard::from_entries(vec![
            BudgetEntry::test("USA", 24.0),
            BudgetEntry::test("ESA", 6.0),
        ]);
        assert!((board.max_budget() - 24.0).abs() < f64::EPSILON);
        assert!((board.scale_for(24.0) - 6.0).abs() < 1e-9);
        assert!((board.scale_for(6.0) - 2.25).abs() < 1e-9);
        assert!((board.scale_for(0.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_board_keeps_base_scale() {
        let board = BudgetBoard::offline();
        assert!(board.is_empty());
        assert!((board.scale_for(3.0) - 1.0).abs() < f64::EPSILON);
    }
}
