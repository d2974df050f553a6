//! Stable, public-facing helpers that wrap the internal service layer.
//!
//! Frontends (CLI, mobile bindings) can rely on these without depending on
//! the entire service surface area.

use penny_domain::MonthlyTotal;

use crate::{
    aggregation_service::AggregationService,
    forecast_service::{ForecastReport, ForecastService, SmoothingFactor},
    source::ExpenseSource,
    summary_service::{SpendingSummary, SummaryService},
    CoreError,
};

/// Loads every transaction from `source` and groups it by calendar month.
pub fn api_monthly_totals(source: &dyn ExpenseSource) -> Result<Vec<MonthlyTotal>, CoreError> {
    let transactions = source.load_transactions()?;
    Ok(AggregationService::aggregate_by_month(&transactions))
}

/// Produces the headline forecast and trend for the transactions in `source`.
pub fn api_forecast_report(
    source: &dyn ExpenseSource,
    alpha: f64,
    trend_months: usize,
) -> Result<ForecastReport, CoreError> {
    let service = ForecastService::new(SmoothingFactor::new(alpha)?);
    let transactions = source.load_transactions()?;
    service.checked_report(&transactions, trend_months)
}

/// Runs the basic spending analysis over the transactions in `source`.
pub fn api_spending_summary(source: &dyn ExpenseSource) -> Result<SpendingSummary, CoreError> {
    let transactions = source.load_transactions()?;
    Ok(SummaryService::analyze(&transactions))
}
