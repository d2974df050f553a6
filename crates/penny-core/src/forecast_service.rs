//! Next-month expense forecasting using Simple Exponential Smoothing.
//!
//! `F(t+1) = alpha * Y(t) + (1 - alpha) * F(t)`, seeded with the first
//! observation. A high alpha weights recent months heavily, which suits
//! short histories.

use serde::Serialize;

use penny_domain::{totals_of, Amounted, MonthKey, MonthlyTotal, Timestamped};

use crate::{aggregation_service::AggregationService, CoreError};

/// Smoothing factor used when nothing else is configured.
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.7;

/// Fewest distinct months needed before a forecast is produced.
pub const MIN_HISTORY_MONTHS: usize = 2;

/// Weight given to the most recent observation, validated to lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingFactor(f64);

impl SmoothingFactor {
    pub fn new(alpha: f64) -> Result<Self, CoreError> {
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(CoreError::InvalidInput(format!(
                "smoothing factor must be within [0, 1], got {alpha}"
            )));
        }
        Ok(Self(alpha))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SmoothingFactor {
    fn default() -> Self {
        Self(DEFAULT_SMOOTHING_FACTOR)
    }
}

/// One labelled bar of the recent-spending trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub month: MonthKey,
    pub label: String,
    pub total: f64,
}

impl From<&MonthlyTotal> for TrendPoint {
    fn from(entry: &MonthlyTotal) -> Self {
        Self {
            month: entry.month_key,
            label: entry.month_key.label(),
            total: entry.total,
        }
    }
}

/// Headline prediction plus the trailing months it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    pub prediction: f64,
    /// Month following the last observed one; `None` without history.
    pub target_month: Option<MonthKey>,
    pub months_observed: usize,
    pub trend: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastService {
    alpha: SmoothingFactor,
}

impl ForecastService {
    pub fn new(alpha: SmoothingFactor) -> Self {
        Self { alpha }
    }

    pub fn alpha(&self) -> SmoothingFactor {
        self.alpha
    }

    /// Forecasts the period after the last value of a chronologically
    /// ordered series. Fewer than two values yield `0.0`.
    pub fn predict(&self, values: &[f64]) -> f64 {
        if values.len() < MIN_HISTORY_MONTHS {
            return 0.0;
        }
        let alpha = self.alpha.value();
        values[1..]
            .iter()
            .fold(values[0], |forecast, &value| alpha * value + (1.0 - alpha) * forecast)
    }

    /// Same as [`ForecastService::predict`] but rejects NaN and infinite values.
    pub fn checked_predict(&self, values: &[f64]) -> Result<f64, CoreError> {
        if let Some(index) = values.iter().position(|value| !value.is_finite()) {
            tracing::warn!(index, "rejecting non-finite monthly total");
            return Err(CoreError::InvalidInput(format!(
                "monthly total at position {index} is not a finite number"
            )));
        }
        Ok(self.predict(values))
    }

    /// Aggregates `transactions`, forecasts from the full monthly series, and
    /// keeps the last `trend_months` entries for display.
    pub fn report<I>(&self, transactions: I, trend_months: usize) -> ForecastReport
    where
        I: IntoIterator,
        I::Item: Amounted + Timestamped,
    {
        let series = AggregationService::aggregate_by_month(transactions);
        let prediction = self.predict(&totals_of(&series));
        self.build_report(&series, prediction, trend_months)
    }

    /// Like [`ForecastService::report`], but fails when a monthly total is not finite.
    pub fn checked_report<I>(
        &self,
        transactions: I,
        trend_months: usize,
    ) -> Result<ForecastReport, CoreError>
    where
        I: IntoIterator,
        I::Item: Amounted + Timestamped,
    {
        let series = AggregationService::aggregate_by_month(transactions);
        let prediction = self.checked_predict(&totals_of(&series))?;
        Ok(self.build_report(&series, prediction, trend_months))
    }

    fn build_report(
        &self,
        series: &[MonthlyTotal],
        prediction: f64,
        trend_months: usize,
    ) -> ForecastReport {
        let trend = AggregationService::trailing_months(series, trend_months)
            .iter()
            .map(TrendPoint::from)
            .collect();
        tracing::debug!(
            months = series.len(),
            alpha = self.alpha.value(),
            prediction,
            "computed expense forecast"
        );
        ForecastReport {
            prediction,
            target_month: series.last().map(|entry| entry.month_key.next()),
            months_observed: series.len(),
            trend,
        }
    }
}

/// Forecasts the next period with the default smoothing factor of 0.7.
pub fn predict_next_period(monthly_totals: &[f64]) -> f64 {
    ForecastService::default().predict(monthly_totals)
}
