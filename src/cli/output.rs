use std::fmt::Write;

use colored::Colorize;
use penny_core::{ForecastReport, SpendingSummary};
use penny_domain::MonthlyTotal;

const BAR_WIDTH: usize = 30;
const NO_HISTORY: &str = "No historical data available";

/// Symbol printed in front of amounts for the configured currency code.
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        other => other,
    }
}

pub fn format_amount(amount: f64, currency: &str) -> String {
    format!("{} {:.2}", currency_symbol(currency), amount)
}

pub fn render_forecast(report: &ForecastReport, currency: &str) -> String {
    let mut text = String::new();
    let heading = match report.target_month {
        Some(month) => format!("Predicted expense for {}", month.label()),
        None => "Predicted expense for next month".to_string(),
    };
    let _ = writeln!(text, "{}", heading.bold());
    let _ = writeln!(
        text,
        "{}",
        format_amount(report.prediction, currency).green().bold()
    );
    if report.months_observed < penny_core::MIN_HISTORY_MONTHS {
        let _ = writeln!(
            text,
            "{}",
            "At least two months of history are needed for a forecast.".yellow()
        );
    }
    let _ = writeln!(text);
    let _ = writeln!(text, "{}", format!("Last {} Months Trend", report.trend.len()).bold());
    let rows: Vec<(String, f64)> = report
        .trend
        .iter()
        .map(|point| (point.label.clone(), point.total))
        .collect();
    text.push_str(&render_bars(&rows, currency));
    text
}

pub fn render_trend(trend: &[MonthlyTotal], currency: &str) -> String {
    let rows: Vec<(String, f64)> = trend
        .iter()
        .map(|entry| (entry.month_key.label(), entry.total))
        .collect();
    render_bars(&rows, currency)
}

pub fn render_summary(summary: &SpendingSummary, currency: &str) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{}", "Basic Expense Analysis".bold());
    let _ = writeln!(
        text,
        "Total spending: {}",
        format_amount(summary.total, currency)
    );
    let _ = writeln!(text, "Number of transactions: {}", summary.transaction_count);
    if let Some(top) = &summary.top_category {
        let _ = writeln!(text);
        let _ = writeln!(text, "Highest spending category: {}", top.name.cyan());
        let _ = writeln!(
            text,
            "Amount: {} ({}%)",
            format_amount(top.total, currency),
            top.share_percent
        );
    }
    text
}

/// Draws one horizontal bar per row, scaled against the largest positive total.
fn render_bars(rows: &[(String, f64)], currency: &str) -> String {
    if rows.is_empty() {
        return format!("{NO_HISTORY}\n");
    }
    let max = rows.iter().map(|(_, total)| *total).fold(0.0_f64, f64::max);
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let mut text = String::new();
    for (label, total) in rows {
        let _ = writeln!(
            text,
            "{label:<label_width$}  {bar:<width$}  {amount}",
            bar = bar(*total, max),
            width = BAR_WIDTH,
            amount = format_amount(*total, currency)
        );
    }
    text
}

fn bar(total: f64, max: f64) -> String {
    if max <= 0.0 || total <= 0.0 || !total.is_finite() {
        return String::new();
    }
    let filled = ((total / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled.clamp(1, BAR_WIDTH))
}
