mod accounts_page;
mod core;
mod create_endpoint;
mod delete_endpoint;

pub use accounts_page::get_accounts_page;
pub use core::{Account, add_account, create_account_table, delete_account, get_accounts};
pub use create_endpoint::create_account_endpoint;

#[cfg(test)]
pub use core::get_account;
#[cfg(test)]
pub use create_endpoint::AccountForm;
pub use delete_endpoint::delete_account_endpoint;
