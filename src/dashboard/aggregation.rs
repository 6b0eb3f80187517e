//! Pure aggregations over transactions, budgets and snapshots for the dashboard.

use std::collections::HashMap;

use time::Date;

use crate::{budget::Budget, net_worth::NetWorth, transaction::Transaction};

/// Money in and out over a period.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(super) struct CashFlow {
    /// The sum of the positive transaction amounts.
    pub income: f64,
    /// The sum of the magnitudes of the negative transaction amounts.
    pub expenses: f64,
    /// `income - expenses`.
    pub net: f64,
}

/// How much of a budget has been spent.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct BudgetProgress {
    pub category: String,
    pub budgeted: f64,
    pub spent: f64,
}

impl BudgetProgress {
    /// The budget left over, negative when overspent.
    pub fn remaining(&self) -> f64 {
        self.budgeted - self.spent
    }

    /// The share of the budget spent as a percentage clamped to 0..=100,
    /// for sizing a progress bar.
    pub fn percent_spent(&self) -> f64 {
        if self.budgeted <= 0.0 {
            return if self.spent > 0.0 { 100.0 } else { 0.0 };
        }

        (self.spent / self.budgeted * 100.0).clamp(0.0, 100.0)
    }
}

pub(super) fn cash_flow(transactions: &[Transaction]) -> CashFlow {
    let (income, expenses) =
        transactions
            .iter()
            .fold((0.0, 0.0), |(income, expenses), transaction| {
                if transaction.amount > 0.0 {
                    (income + transaction.amount, expenses)
                } else {
                    (income, expenses - transaction.amount)
                }
            });

    CashFlow {
        income,
        expenses,
        net: income - expenses,
    }
}

/// Pairs each budget with the expenses recorded against its category.
///
/// Income in a budgeted category does not reduce the amount spent.
pub(super) fn budget_progress(
    budgets: &[Budget],
    transactions: &[Transaction],
) -> Vec<BudgetProgress> {
    let mut spent_by_category: HashMap<&str, f64> = HashMap::new();

    for transaction in transactions.iter().filter(|transaction| transaction.amount < 0.0) {
        *spent_by_category
            .entry(transaction.category.as_str())
            .or_insert(0.0) -= transaction.amount;
    }

    budgets
        .iter()
        .map(|budget| BudgetProgress {
            category: budget.category.clone(),
            budgeted: budget.amount,
            spent: spent_by_category
                .get(budget.category.as_str())
                .copied()
                .unwrap_or_default(),
        })
        .collect()
}

/// Splits the snapshot history into date labels and the three series values.
pub(super) fn net_worth_series(
    history: &[NetWorth],
) -> (Vec<String>, Vec<f64>, Vec<f64>, Vec<f64>) {
    let labels = history.iter().map(|entry| entry.date.to_string()).collect();
    let assets = history.iter().map(|entry| entry.total_assets).collect();
    let liabilities = history
        .iter()
        .map(|entry| -entry.total_liabilities)
        .collect();
    let net_worth = history.iter().map(|entry| entry.net_worth).collect();

    (labels, assets, liabilities, net_worth)
}

/// The first day of the month that `date` falls in.
pub(super) fn start_of_month(date: Date) -> Date {
    date - time::Duration::days(i64::from(date.day()) - 1)
}
