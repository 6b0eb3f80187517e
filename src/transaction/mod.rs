//! Transactions: the model, its database queries and the transactions page.

mod core;
mod create_endpoint;
mod transactions_page;

pub use core::{
    NewTransaction, Transaction, TransactionFilter, add_transaction, create_transaction_table,
    get_transactions,
};
pub use create_endpoint::create_transaction_endpoint;
pub use transactions_page::get_transactions_page;

#[cfg(test)]
pub use core::count_transactions;
#[cfg(test)]
pub use create_endpoint::TransactionForm;
