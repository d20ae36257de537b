use serde::{Deserialize, Serialize};

use super::super::validator::EXPIRED_LICENSE_KEY;

/// Thresholds steering the evaluator's decision ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub auto_accept_income: u64,
    /// Incomes at or above this skip the frequent-flyer identity check.
    pub identity_check_waiver_income: u64,
    pub minimum_age: u32,
    /// Applicants strictly older than this get a detailed lookup.
    pub detailed_lookup_age: u32,
    pub expired_license_key: String,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            auto_accept_income: 100_000,
            identity_check_waiver_income: 99_000,
            minimum_age: 20,
            detailed_lookup_age: 30,
            expired_license_key: EXPIRED_LICENSE_KEY.to_string(),
        }
    }
}
