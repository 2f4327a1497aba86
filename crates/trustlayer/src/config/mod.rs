use crate::reputation::RiskPolicy;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub risk: RiskPolicy,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = RiskPolicy::default();
        let risk = RiskPolicy {
            score_ceiling: env_number("TRUSTLAYER_RISK_SCORE_CEILING", defaults.score_ceiling)?,
            new_account_days: env_number("TRUSTLAYER_NEW_ACCOUNT_DAYS", defaults.new_account_days)?,
            min_counterparties: env_number(
                "TRUSTLAYER_MIN_COUNTERPARTIES",
                defaults.min_counterparties,
            )?,
            max_failure_rate: env_number("TRUSTLAYER_MAX_FAILURE_RATE", defaults.max_failure_rate)?,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            risk,
        })
    }
}

fn env_number<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a number (found '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
