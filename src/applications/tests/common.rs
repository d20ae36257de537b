use std::sync::{Arc, Mutex};

use crate::applications::domain::CreditCardApplication;
use crate::applications::fraud::MockFraudRiskCheck;
use crate::applications::validator::{
    FrequentFlyerNumberValidator, MockFrequentFlyerNumberValidator, ValidationError, ValidationMode,
};
use crate::applications::CreditCardApplicationEvaluator;

pub(super) fn application(income: u64, age: u32, number: &str) -> CreditCardApplication {
    CreditCardApplication::new(income, age, number)
}

/// Fraud check that never flags and tolerates any number of calls.
pub(super) fn clean_fraud_check() -> MockFraudRiskCheck {
    let mut fraud = MockFraudRiskCheck::new();
    fraud.expect_is_fraud_risk().return_const(false);
    fraud
}

pub(super) fn flagging_fraud_check() -> MockFraudRiskCheck {
    let mut fraud = MockFraudRiskCheck::new();
    fraud.expect_is_fraud_risk().return_const(true);
    fraud
}

/// Validator mock reporting `license_key` and accepting any mode writes.
/// `is_valid` has no expectation; tests add the one they need.
pub(super) fn licensed_validator(license_key: &str) -> MockFrequentFlyerNumberValidator {
    let mut validator = MockFrequentFlyerNumberValidator::new();
    validator
        .expect_license_key()
        .return_const(license_key.to_string());
    validator.expect_set_validation_mode().return_const(());
    validator
        .expect_validation_mode()
        .return_const(ValidationMode::default());
    validator
}

pub(super) type MockEvaluator =
    CreditCardApplicationEvaluator<MockFrequentFlyerNumberValidator, MockFraudRiskCheck>;

pub(super) fn evaluator(validator: MockFrequentFlyerNumberValidator) -> MockEvaluator {
    CreditCardApplicationEvaluator::new(validator, clean_fraud_check())
}

/// Hand-written validator that remembers every property write and lookup.
#[derive(Default, Clone)]
pub(super) struct RecordingValidator {
    pub(super) license_key: String,
    /// `None` makes every lookup fail.
    pub(super) answer: Option<bool>,
    pub(super) mode: ValidationMode,
    pub(super) mode_writes: Vec<ValidationMode>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl RecordingValidator {
    pub(super) fn answering(answer: bool) -> Self {
        Self {
            license_key: "OK".to_string(),
            answer: Some(answer),
            ..Self::default()
        }
    }

    pub(super) fn failing() -> Self {
        Self {
            license_key: "OK".to_string(),
            answer: None,
            ..Self::default()
        }
    }

    pub(super) fn lookups(&self) -> Vec<String> {
        self.lookups.lock().expect("lookup mutex poisoned").clone()
    }
}

impl FrequentFlyerNumberValidator for RecordingValidator {
    fn is_valid(&self, frequent_flyer_number: &str) -> Result<bool, ValidationError> {
        self.lookups
            .lock()
            .expect("lookup mutex poisoned")
            .push(frequent_flyer_number.to_string());
        self.answer
            .ok_or_else(|| ValidationError::Unavailable("lookup service offline".to_string()))
    }

    fn license_key(&self) -> String {
        self.license_key.clone()
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        self.mode_writes.push(mode);
        self.mode = mode;
    }
}
