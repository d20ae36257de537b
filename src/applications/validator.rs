use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// License key value reported by a validator whose license has lapsed.
pub const EXPIRED_LICENSE_KEY: &str = "EXPIRED";

/// Depth of verification a validator performs per lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    Quick,
    Detailed,
}

/// External frequent-flyer lookup consumed by the evaluator.
#[cfg_attr(test, mockall::automock)]
pub trait FrequentFlyerNumberValidator {
    fn is_valid(&self, frequent_flyer_number: &str) -> Result<bool, ValidationError>;
    fn license_key(&self) -> String;
    fn validation_mode(&self) -> ValidationMode;
    fn set_validation_mode(&mut self, mode: ValidationMode);
}

/// Failure raised by a validator lookup.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("validator unavailable: {0}")]
    Unavailable(String),
    #[error("validator license rejected")]
    LicenseRejected,
}

/// Payload delivered to lookup observers after each identity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupPerformed {
    pub frequent_flyer_number: String,
    pub mode: ValidationMode,
    pub valid: bool,
}

type LookupCallback = Box<dyn Fn(&LookupPerformed) + Send + Sync>;

/// Subscribers notified by a validator when it performs a lookup.
#[derive(Default)]
pub struct LookupObservers {
    callbacks: Vec<LookupCallback>,
}

impl LookupObservers {
    pub fn subscribe<C>(&mut self, callback: C)
    where
        C: Fn(&LookupPerformed) + Send + Sync + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    pub fn notify(&self, event: &LookupPerformed) {
        for callback in &self.callbacks {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for LookupObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupObservers")
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}

/// Validator accepting identifiers that match a regular expression.
#[derive(Debug)]
pub struct PatternValidator {
    pattern: Regex,
    license_key: String,
    expired_license_key: String,
    mode: ValidationMode,
    observers: LookupObservers,
}

impl PatternValidator {
    pub fn new(pattern: &str, license_key: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            license_key: license_key.into(),
            expired_license_key: EXPIRED_LICENSE_KEY.to_string(),
            mode: ValidationMode::default(),
            observers: LookupObservers::default(),
        })
    }

    pub fn subscribe<C>(&mut self, callback: C)
    where
        C: Fn(&LookupPerformed) + Send + Sync + 'static,
    {
        self.observers.subscribe(callback);
    }

    pub fn observers(&self) -> &LookupObservers {
        &self.observers
    }

    /// Replace the license key treated as expired, which defaults to
    /// [`EXPIRED_LICENSE_KEY`].
    pub fn with_expired_license_key(mut self, key: impl Into<String>) -> Self {
        self.expired_license_key = key.into();
        self
    }
}

impl FrequentFlyerNumberValidator for PatternValidator {
    fn is_valid(&self, frequent_flyer_number: &str) -> Result<bool, ValidationError> {
        if self.license_key == self.expired_license_key {
            return Err(ValidationError::LicenseRejected);
        }

        let valid = self.pattern.is_match(frequent_flyer_number);
        self.observers.notify(&LookupPerformed {
            frequent_flyer_number: frequent_flyer_number.to_string(),
            mode: self.mode,
            valid,
        });
        Ok(valid)
    }

    fn license_key(&self) -> String {
        self.license_key.clone()
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
    }
}
