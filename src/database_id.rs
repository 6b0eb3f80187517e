//! Database ID type definitions.

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseId = i64;
/// The ID of an [Account](crate::account::Account).
pub type AccountId = DatabaseId;
/// The ID of a [Budget](crate::budget::Budget).
pub type BudgetId = DatabaseId;
