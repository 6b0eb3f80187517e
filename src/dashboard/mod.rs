//! Dashboard module
//!
//! Provides an overview page with a sidebar for the net worth, budget,
//! investments and cash flow sections.

mod aggregation;
mod charts;
mod handlers;

pub use handlers::get_dashboard_page;
