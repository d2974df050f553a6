pub mod output;

use std::{
    env,
    io::{self, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use penny_config::{Config, ConfigManager, ForecastSettings};
use penny_core::{
    AggregationService, ExpenseSource, ForecastService, SmoothingFactor, SummaryService,
};
use penny_storage_json::JsonExpenseFile;

use crate::{errors::CliError, utils::build_info};

/// Environment variable that relocates the configuration directory.
pub const HOME_ENV: &str = "PENNYKEEPER_HOME";

#[derive(Parser, Debug)]
#[command(name = "pennykeeper", author, version, about = "Monthly expense forecasting")]
pub struct Cli {
    /// Disable ANSI colors in the output.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Predict next month's spending and show the recent trend.
    Forecast {
        /// JSON file holding the expense history.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Smoothing factor in [0, 1]; defaults to the configured value.
        #[arg(long)]
        alpha: Option<f64>,
        /// Number of trailing months to display.
        #[arg(long)]
        months: Option<usize>,
        /// Print the report as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show the trailing monthly totals.
    Trend {
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        months: Option<usize>,
    },
    /// Basic spending analysis: totals and the heaviest category.
    Summary {
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print build metadata.
    Version,
}

/// Parses process arguments and runs the selected command against stdout.
pub fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if matches!(cli.command, Command::Version) {
        return run(cli, &Config::default(), &mut out);
    }
    let config = load_config()?;
    run(cli, &config, &mut out)
}

/// Runs a parsed command with an explicit configuration and output sink.
pub fn run(cli: Cli, config: &Config, out: &mut dyn Write) -> Result<(), CliError> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::Forecast {
            file,
            alpha,
            months,
            json,
        } => {
            let settings = merged_settings(config, alpha, months)?;
            let alpha = SmoothingFactor::new(settings.smoothing_factor)?;
            let months = settings.trend_months;
            let source = expense_file(config, file);
            let transactions = source.load_transactions()?;
            tracing::info!(
                path = %source.path().display(),
                transactions = transactions.len(),
                "loaded expense history"
            );
            let report = ForecastService::new(alpha).checked_report(&transactions, months)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                write!(out, "{}", output::render_forecast(&report, &config.currency))?;
            }
        }
        Command::Trend { file, months } => {
            let months = merged_settings(config, None, months)?.trend_months;
            let transactions = expense_file(config, file).load_transactions()?;
            let series = AggregationService::aggregate_by_month(&transactions);
            let trend = AggregationService::trailing_months(&series, months);
            write!(out, "{}", output::render_trend(trend, &config.currency))?;
        }
        Command::Summary { file, json } => {
            let transactions = expense_file(config, file).load_transactions()?;
            let summary = SummaryService::analyze(&transactions);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
            } else {
                write!(out, "{}", output::render_summary(&summary, &config.currency))?;
            }
        }
        Command::Version => {
            writeln!(out, "{}", build_info::current().render())?;
        }
    }
    Ok(())
}

/// Applies command-line overrides on top of the configured forecast settings
/// and validates the result the same way a config file is validated.
fn merged_settings(
    config: &Config,
    alpha: Option<f64>,
    months: Option<usize>,
) -> Result<ForecastSettings, CliError> {
    let settings = ForecastSettings {
        smoothing_factor: alpha.unwrap_or(config.forecast.smoothing_factor),
        trend_months: months.unwrap_or(config.forecast.trend_months),
    };
    settings.validate()?;
    Ok(settings)
}

fn expense_file(config: &Config, file: Option<PathBuf>) -> JsonExpenseFile {
    match file {
        Some(path) => JsonExpenseFile::new(path),
        None => JsonExpenseFile::in_dir(&config.resolve_default_data_root()),
    }
}

fn load_config() -> Result<Config, CliError> {
    let base = match env::var_os(HOME_ENV) {
        Some(path) => PathBuf::from(path),
        None => dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pennykeeper"),
    };
    let manager = ConfigManager::new(base.join("config").join("config.json"));
    let config = manager.load()?;
    tracing::debug!(path = %manager.config_path().display(), "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("valid arguments")
    }

    #[test]
    fn forecast_flags_parse() {
        let cli = parse(&[
            "pennykeeper",
            "--no-color",
            "forecast",
            "--file",
            "spend.json",
            "--alpha",
            "0.5",
            "--months",
            "3",
        ]);

        assert!(cli.no_color);
        match cli.command {
            Command::Forecast {
                file,
                alpha,
                months,
                json,
            } => {
                assert_eq!(file, Some(PathBuf::from("spend.json")));
                assert_eq!(alpha, Some(0.5));
                assert_eq!(months, Some(3));
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn invalid_alpha_is_reported() {
        let cli = parse(&["pennykeeper", "forecast", "--alpha", "3", "--file", "none.json"]);
        let mut out = Vec::new();

        let err = run(cli, &Config::default(), &mut out).expect_err("alpha out of range");
        assert!(err.to_string().contains("smoothing_factor"));
        assert!(out.is_empty());
    }

    #[test]
    fn zero_month_window_is_rejected() {
        for args in [
            ["pennykeeper", "forecast", "--months", "0", "--file", "none.json"],
            ["pennykeeper", "trend", "--months", "0", "--file", "none.json"],
        ] {
            let mut out = Vec::new();
            let err = run(parse(&args), &Config::default(), &mut out).expect_err("zero months");

            assert!(err.to_string().contains("trend_months"));
            assert!(out.is_empty());
        }
    }

    #[test]
    fn version_prints_build_metadata() {
        let mut out = Vec::new();
        run(parse(&["pennykeeper", "version"]), &Config::default(), &mut out).expect("version");

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("PennyKeeper "));
    }
}
