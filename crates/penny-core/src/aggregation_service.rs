//! Groups dated transactions into calendar-month totals.

use std::collections::BTreeMap;

use penny_domain::{Amounted, MonthKey, MonthlyTotal, Timestamped};

pub struct AggregationService;

impl AggregationService {
    /// Sums transaction amounts per calendar month.
    ///
    /// The result is strictly increasing by month key and only contains
    /// months with at least one transaction. Amounts are summed as given,
    /// zero and negative values included.
    pub fn aggregate_by_month<I>(transactions: I) -> Vec<MonthlyTotal>
    where
        I: IntoIterator,
        I::Item: Amounted + Timestamped,
    {
        let mut buckets: BTreeMap<MonthKey, f64> = BTreeMap::new();
        let mut count = 0usize;
        for txn in transactions {
            let key = MonthKey::from_date(&txn.occurred_at());
            *buckets.entry(key).or_insert(0.0) += txn.amount();
            count += 1;
        }
        tracing::debug!(
            transactions = count,
            months = buckets.len(),
            "aggregated transactions by month"
        );
        buckets
            .into_iter()
            .map(|(month_key, total)| MonthlyTotal::new(month_key, total))
            .collect()
    }

    /// Returns the last `months` entries of an aggregated series, or the whole
    /// series when it is shorter.
    pub fn trailing_months(series: &[MonthlyTotal], months: usize) -> &[MonthlyTotal] {
        let start = series.len().saturating_sub(months);
        &series[start..]
    }
}

/// Free-function form of [`AggregationService::aggregate_by_month`].
pub fn aggregate_by_month<I>(transactions: I) -> Vec<MonthlyTotal>
where
    I: IntoIterator,
    I::Item: Amounted + Timestamped,
{
    AggregationService::aggregate_by_month(transactions)
}
