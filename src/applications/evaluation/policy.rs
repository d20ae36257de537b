use super::super::domain::CreditCardApplication;
use super::super::validator::ValidationMode;
use super::config::EvaluationConfig;
use serde::{Deserialize, Serialize};

/// Outcome of evaluating a single application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationDecision {
    AutoAccepted,
    AutoDeclined,
    ReferredToHuman,
    ReferredToHumanFraudRisk,
}

impl ApplicationDecision {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationDecision::AutoAccepted => "auto_accepted",
            ApplicationDecision::AutoDeclined => "auto_declined",
            ApplicationDecision::ReferredToHuman => "referred_to_human",
            ApplicationDecision::ReferredToHumanFraudRisk => "referred_to_human_fraud_risk",
        }
    }

    pub fn summary(&self) -> String {
        match self {
            ApplicationDecision::AutoAccepted => "application accepted automatically".to_string(),
            ApplicationDecision::AutoDeclined => "application declined automatically".to_string(),
            ApplicationDecision::ReferredToHuman => "referred to a human reviewer".to_string(),
            ApplicationDecision::ReferredToHumanFraudRisk => {
                "referred to a human reviewer: possible fraud".to_string()
            }
        }
    }

    pub fn requires_human(&self) -> bool {
        matches!(
            self,
            ApplicationDecision::ReferredToHuman | ApplicationDecision::ReferredToHumanFraudRisk
        )
    }
}

pub(crate) fn lookup_mode_for(
    application: &CreditCardApplication,
    config: &EvaluationConfig,
) -> ValidationMode {
    if application.age > config.detailed_lookup_age {
        ValidationMode::Detailed
    } else {
        ValidationMode::Quick
    }
}

pub(crate) fn identity_check_required(
    application: &CreditCardApplication,
    config: &EvaluationConfig,
) -> bool {
    application.gross_annual_income < config.identity_check_waiver_income
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_mode_switches_strictly_above_threshold() {
        let config = EvaluationConfig::default();

        let thirty = CreditCardApplication::new(0, 30, "");
        let thirty_one = CreditCardApplication::new(0, 31, "");

        assert_eq!(lookup_mode_for(&thirty, &config), ValidationMode::Quick);
        assert_eq!(
            lookup_mode_for(&thirty_one, &config),
            ValidationMode::Detailed
        );
    }

    #[test]
    fn identity_check_waived_from_waiver_income() {
        let config = EvaluationConfig::default();

        assert!(identity_check_required(
            &CreditCardApplication::new(98_999, 40, ""),
            &config
        ));
        assert!(!identity_check_required(
            &CreditCardApplication::new(99_000, 40, ""),
            &config
        ));
    }

    #[test]
    fn decisions_serialize_as_labels() {
        for decision in [
            ApplicationDecision::AutoAccepted,
            ApplicationDecision::AutoDeclined,
            ApplicationDecision::ReferredToHuman,
            ApplicationDecision::ReferredToHumanFraudRisk,
        ] {
            let json = serde_json::to_string(&decision).expect("decision serializes");
            assert_eq!(json, format!("\"{}\"", decision.label()));
        }
    }

    #[test]
    fn only_referrals_require_a_human() {
        assert!(!ApplicationDecision::AutoAccepted.requires_human());
        assert!(!ApplicationDecision::AutoDeclined.requires_human());
        assert!(ApplicationDecision::ReferredToHuman.requires_human());
        assert!(ApplicationDecision::ReferredToHumanFraudRisk.requires_human());
    }
}
