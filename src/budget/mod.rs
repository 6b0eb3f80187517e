//! Monthly spending budgets per category.

mod budgets_page;
mod core;
mod create_endpoint;
mod delete_endpoint;

pub use budgets_page::get_budgets_page;
pub use core::{Budget, add_budget, create_budget_table, delete_budget, get_budgets};
pub use create_endpoint::create_budget_endpoint;
pub use delete_endpoint::delete_budget_endpoint;

#[cfg(test)]
pub use create_endpoint::BudgetForm;
