use super::budgets::BudgetsResponse;
use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct BudgetsRequest {}

impl NoBodyHTTPRequestType for BudgetsRequest {}

impl HTTPRequestType for BudgetsRequest {
    type Response = BudgetsResponse;
    fn endpoint(&self) -> String { String::from("/data/budgets.json") }
}
