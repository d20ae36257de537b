mod config;
mod policy;

pub use config::EvaluationConfig;
pub use policy::ApplicationDecision;

use super::domain::CreditCardApplication;
use super::fraud::FraudRiskCheck;
use super::validator::FrequentFlyerNumberValidator;
use policy::{identity_check_required, lookup_mode_for};
use tracing::{debug, warn};

/// Evaluates applications against the configured thresholds, consulting the
/// fraud check and frequent-flyer validator only when a decision needs them.
///
/// The evaluator counts every identity check the validator answered without
/// failing. The count lives as long as the evaluator.
pub struct CreditCardApplicationEvaluator<V, F> {
    validator: V,
    fraud: F,
    config: EvaluationConfig,
    lookup_count: u64,
}

impl<V, F> CreditCardApplicationEvaluator<V, F>
where
    V: FrequentFlyerNumberValidator,
    F: FraudRiskCheck,
{
    pub fn new(validator: V, fraud: F) -> Self {
        Self::with_config(validator, fraud, EvaluationConfig::default())
    }

    pub fn with_config(validator: V, fraud: F, config: EvaluationConfig) -> Self {
        Self {
            validator,
            fraud,
            config,
            lookup_count: 0,
        }
    }

    /// Decide a single application. Validator failures are absorbed and the
    /// application is referred to a human.
    pub fn evaluate(&mut self, application: &CreditCardApplication) -> ApplicationDecision {
        let decision = self.decide(application);
        debug!(
            income = application.gross_annual_income,
            age = application.age,
            decision = decision.label(),
            "credit card application evaluated"
        );
        decision
    }

    fn decide(&mut self, application: &CreditCardApplication) -> ApplicationDecision {
        if application.gross_annual_income >= self.config.auto_accept_income {
            return ApplicationDecision::AutoAccepted;
        }

        if self.fraud.is_fraud_risk(application) {
            return ApplicationDecision::ReferredToHumanFraudRisk;
        }

        if application.age < self.config.minimum_age {
            return ApplicationDecision::ReferredToHuman;
        }

        if self.validator.license_key() == self.config.expired_license_key {
            return ApplicationDecision::ReferredToHuman;
        }

        self.validator
            .set_validation_mode(lookup_mode_for(application, &self.config));

        if !identity_check_required(application, &self.config) {
            return ApplicationDecision::AutoDeclined;
        }

        match self.validator.is_valid(&application.frequent_flyer_number) {
            Ok(valid) => {
                self.lookup_count = self.lookup_count.saturating_add(1);
                if valid {
                    ApplicationDecision::AutoDeclined
                } else {
                    ApplicationDecision::ReferredToHuman
                }
            }
            Err(error) => {
                warn!(%error, "frequent flyer validation failed; referring application");
                ApplicationDecision::ReferredToHuman
            }
        }
    }

    /// Number of identity checks the validator answered for this evaluator.
    pub fn validator_lookup_count(&self) -> u64 {
        self.lookup_count
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn validator_mut(&mut self) -> &mut V {
        &mut self.validator
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn into_parts(self) -> (V, F) {
        (self.validator, self.fraud)
    }
}
