//! Credit card application evaluation and the collaborators it consults.
//!
//! The evaluator owns its frequent-flyer validator and fraud check. Both are
//! traits so tests and the command-line front end can supply their own.

pub mod domain;
pub mod evaluation;
pub mod fraud;
pub mod validator;

#[cfg(test)]
mod tests;

pub use domain::CreditCardApplication;
pub use evaluation::{ApplicationDecision, CreditCardApplicationEvaluator, EvaluationConfig};
pub use fraud::{BoxedFraudStrategy, FraudLookup, FraudRiskCheck};
pub use validator::{
    FrequentFlyerNumberValidator, LookupObservers, LookupPerformed, PatternValidator,
    ValidationError, ValidationMode, EXPIRED_LICENSE_KEY,
};
