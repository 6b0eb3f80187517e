mod balances_page;
mod core;
mod create_endpoint;

pub use balances_page::get_balances_page;
pub use core::{
    AccountBalance, BalanceTableRow, create_balance_table, get_balance, get_balances,
    update_balance,
};
pub use create_endpoint::update_balance_endpoint;

#[cfg(test)]
pub use create_endpoint::BalanceForm;
