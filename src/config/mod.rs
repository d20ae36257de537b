use std::env;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::applications::EvaluationConfig;

/// Distinguishes runtime behavior for different stages of deployment.
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

/// Top-level configuration for the evaluator front end.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub validator: ValidatorConfig,
    pub fraud: FraudConfig,
    pub evaluation: EvaluationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let validator = ValidatorConfig {
            license_key: env::var("VALIDATOR_LICENSE_KEY").unwrap_or_else(|_| "OK".to_string()),
            number_pattern: env::var("VALIDATOR_NUMBER_PATTERN")
                .unwrap_or_else(|_| "^[a-z]+$".to_string()),
        };

        let blocked_numbers = env::var("FRAUD_BLOCKED_NUMBERS")
            .map(|raw| parse_list(&raw))
            .unwrap_or_default();

        let defaults = EvaluationConfig::default();
        let evaluation = EvaluationConfig {
            auto_accept_income: numeric_var(
                "EVAL_AUTO_ACCEPT_INCOME",
                defaults.auto_accept_income,
            )?,
            identity_check_waiver_income: numeric_var(
                "EVAL_IDENTITY_WAIVER_INCOME",
                defaults.identity_check_waiver_income,
            )?,
            minimum_age: numeric_var("EVAL_MINIMUM_AGE", defaults.minimum_age)?,
            detailed_lookup_age: numeric_var(
                "EVAL_DETAILED_LOOKUP_AGE",
                defaults.detailed_lookup_age,
            )?,
            expired_license_key: defaults.expired_license_key,
        };

        if evaluation.identity_check_waiver_income > evaluation.auto_accept_income {
            return Err(ConfigError::InconsistentThresholds {
                waiver: evaluation.identity_check_waiver_income,
                auto_accept: evaluation.auto_accept_income,
            });
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            validator,
            fraud: FraudConfig { blocked_numbers },
            evaluation,
        })
    }
}

fn numeric_var<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr<Err = ParseIntError>,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|source| ConfigError::InvalidNumber { key, source }),
        Err(_) => Ok(default),
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Settings for the pattern-based frequent-flyer validator.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    pub license_key: String,
    pub number_pattern: String,
}

/// Frequent-flyer numbers the fraud check treats as risky.
#[derive(Debug, Clone, Default)]
pub struct FraudConfig {
    pub blocked_numbers: Vec<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber {
        key: &'static str,
        source: ParseIntError,
    },
    InconsistentThresholds {
        waiver: u64,
        auto_accept: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, .. } => {
                write!(f, "{key} must be a non-negative whole number")
            }
            ConfigError::InconsistentThresholds {
                waiver,
                auto_accept,
            } => write!(
                f,
                "EVAL_IDENTITY_WAIVER_INCOME ({waiver}) must not exceed EVAL_AUTO_ACCEPT_INCOME ({auto_accept})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidNumber { source, .. } => Some(source),
            ConfigError::InconsistentThresholds { .. } => None,
        }
    }
}
