pub mod astronauts;
pub mod budgets;
pub mod country_colors;
pub mod response_common;
pub mod satellite_dataset;
pub mod timeline;
