use std::fs;

use penny_config::{Config, ConfigError, ConfigManager, ForecastSettings};
use tempfile::tempdir;

#[test]
fn default_config_uses_standard_forecast_settings() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert!(!cfg.locale.is_empty());
    assert_eq!(cfg.forecast.smoothing_factor, 0.7);
    assert_eq!(cfg.forecast.trend_months, 6);
    assert!(cfg.validate().is_ok());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.currency = "EUR".to_string();
    cfg.forecast.smoothing_factor = 0.4;
    cfg.forecast.trend_months = 12;

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.currency, "EUR");
    assert_eq!(loaded.forecast.smoothing_factor, 0.4);
    assert_eq!(loaded.forecast.trend_months, 12);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.forecast, ForecastSettings::default());
    assert!(manager.config_path().ends_with("config/config.json"));
}

#[test]
fn partial_file_fills_forecast_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"locale": "pt-PT", "currency": "EUR", "forecast": {"trend_months": 3}}"#,
    )
    .expect("write config");

    let loaded = ConfigManager::new(path).load().expect("load config");

    assert_eq!(loaded.locale, "pt-PT");
    assert_eq!(loaded.forecast.smoothing_factor, 0.7);
    assert_eq!(loaded.forecast.trend_months, 3);
}

#[test]
fn out_of_range_smoothing_factor_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.forecast.smoothing_factor = 1.2;

    assert!(matches!(manager.save(&cfg), Err(ConfigError::Invalid(_))));
    assert!(!manager.config_path().exists());

    cfg.forecast.smoothing_factor = 0.7;
    cfg.forecast.trend_months = 0;
    assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn malformed_file_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").expect("write config");

    let err = ConfigManager::new(path).load().expect_err("malformed config");
    assert!(matches!(err, ConfigError::Serde(_)));
}
