//! Display formatting for terminal output
//!
//! Category statements, the spend chart and the summary table.

pub mod category;
pub mod chart;
pub mod summary;

pub use category::{format_categories, format_entry, format_title};
pub use chart::{create_spend_chart, spend_percentages};
pub use summary::format_summary;
