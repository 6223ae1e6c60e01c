use super::http_response::{astronauts, budgets, country_colors, satellite_dataset, timeline};

pub mod astronauts_get;
pub mod budgets_get;
pub mod country_colors_get;
pub mod request_common;
pub mod satellite_dataset_get;
pub mod timeline_get;
