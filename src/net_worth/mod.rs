//! Net worth: totals derived from account balances and the snapshots recorded from them.

mod api_endpoint;
mod core;
mod create_endpoint;

pub use api_endpoint::get_net_worth_history_endpoint;
pub use core::{
    NetWorth, NetWorthTotals, add_net_worth_entry, calculate_net_worth, create_net_worth_table,
    get_latest_net_worth, get_net_worth_history,
};
pub use create_endpoint::create_net_worth_endpoint;

#[cfg(test)]
pub use create_endpoint::NetWorthForm;
