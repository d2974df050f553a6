//! Basic spending analysis used when no richer assistant is available.

use std::collections::BTreeMap;

use serde::Serialize;

use penny_domain::Transaction;

pub const UNCATEGORIZED: &str = "Uncategorized";

/// Spending attributed to a single category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub name: String,
    pub total: f64,
    /// Whole percent of overall spending, truncated toward zero.
    pub share_percent: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingSummary {
    pub total: f64,
    pub transaction_count: usize,
    pub top_category: Option<CategoryShare>,
}

pub struct SummaryService;

impl SummaryService {
    pub fn analyze(transactions: &[Transaction]) -> SpendingSummary {
        let total: f64 = transactions.iter().map(|txn| txn.amount).sum();
        let top_category = Self::category_totals_in_order(transactions)
            .into_iter()
            .fold(None::<(String, f64)>, |best, (name, amount)| match best {
                Some((_, best_amount)) if best_amount >= amount => best,
                _ => Some((name, amount)),
            })
            .map(|(name, amount)| CategoryShare {
                name,
                total: amount,
                share_percent: share_percent(amount, total),
            });
        SpendingSummary {
            total,
            transaction_count: transactions.len(),
            top_category,
        }
    }

    /// Sums spending per category name, in the order each category first
    /// appears. Ties for the top category go to the earliest one.
    pub fn category_totals_in_order(transactions: &[Transaction]) -> Vec<(String, f64)> {
        let mut totals: Vec<(String, f64)> = Vec::new();
        for txn in transactions {
            let name = txn.category.as_deref().unwrap_or(UNCATEGORIZED);
            match totals.iter_mut().find(|(existing, _)| existing == name) {
                Some((_, total)) => *total += txn.amount,
                None => totals.push((name.to_string(), txn.amount)),
            }
        }
        totals
    }

    /// Sums spending per category name, sorted by name.
    pub fn category_totals(transactions: &[Transaction]) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for txn in transactions {
            let name = txn.category.as_deref().unwrap_or(UNCATEGORIZED);
            *totals.entry(name.to_string()).or_insert(0.0) += txn.amount;
        }
        totals
    }
}

fn share_percent(amount: f64, total: f64) -> i64 {
    if total == 0.0 {
        return 0;
    }
    (amount / total * 100.0) as i64
}
