use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

/// Stores user-configurable preferences and forecasting parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub forecast: ForecastSettings,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for expense files. Defaults to `~/Documents/PennyKeeper`.
    pub default_data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            forecast: ForecastSettings::default(),
            default_data_root: None,
        }
    }
}

impl Config {
    pub fn resolve_default_data_root(&self) -> PathBuf {
        if let Some(path) = &self.default_data_root {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("PennyKeeper")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.forecast.validate()
    }
}

/// Parameters of the monthly expense forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastSettings {
    #[serde(default = "ForecastSettings::default_smoothing_factor")]
    pub smoothing_factor: f64,
    #[serde(default = "ForecastSettings::default_trend_months")]
    pub trend_months: usize,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            smoothing_factor: Self::default_smoothing_factor(),
            trend_months: Self::default_trend_months(),
        }
    }
}

impl ForecastSettings {
    pub fn default_smoothing_factor() -> f64 {
        0.7
    }

    pub fn default_trend_months() -> usize {
        6
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let alpha = self.smoothing_factor;
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(ConfigError::Invalid(format!(
                "forecast.smoothing_factor must be within [0, 1], got {alpha}"
            )));
        }
        if self.trend_months == 0 {
            return Err(ConfigError::Invalid(
                "forecast.trend_months must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
