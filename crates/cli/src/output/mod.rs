//! Output formatting.

mod detail;
mod table;

pub use detail::{format_report_detail, format_status_detail};
pub use table::{format_profiles_table, format_routes_table};
