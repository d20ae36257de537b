use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use super::domain::CreditCardApplication;

/// Fraud screening consulted before any age or identity checks.
#[cfg_attr(test, mockall::automock)]
pub trait FraudRiskCheck {
    fn is_fraud_risk(&self, application: &CreditCardApplication) -> bool;
}

/// Fraud check whose underlying rule is an injected strategy.
///
/// `is_fraud_risk` stays fixed; swapping the strategy replaces only the rule.
pub struct FraudLookup<S> {
    strategy: S,
}

/// Strategy signature accepted by [`FraudLookup`].
pub type BoxedFraudStrategy = Box<dyn Fn(&CreditCardApplication) -> bool + Send + Sync>;

impl<S> FraudLookup<S>
where
    S: Fn(&CreditCardApplication) -> bool,
{
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }
}

impl FraudLookup<BoxedFraudStrategy> {
    /// Flags applications whose frequent-flyer number appears in `numbers`.
    pub fn blocklist<I, N>(numbers: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let blocked: BTreeSet<String> = numbers.into_iter().map(Into::into).collect();
        Self {
            strategy: Box::new(move |application: &CreditCardApplication| {
                blocked.contains(&application.frequent_flyer_number)
            }),
        }
    }
}

impl FraudLookup<fn(&CreditCardApplication) -> bool> {
    /// Never flags an application.
    pub fn no_signals() -> Self {
        Self {
            strategy: no_fraud_signals,
        }
    }
}

impl Default for FraudLookup<fn(&CreditCardApplication) -> bool> {
    fn default() -> Self {
        Self::no_signals()
    }
}

fn no_fraud_signals(_application: &CreditCardApplication) -> bool {
    false
}

impl<S> FraudRiskCheck for FraudLookup<S>
where
    S: Fn(&CreditCardApplication) -> bool,
{
    fn is_fraud_risk(&self, application: &CreditCardApplication) -> bool {
        let flagged = (self.strategy)(application);
        if flagged {
            debug!(
                frequent_flyer_number = %application.frequent_flyer_number,
                "application flagged as fraud risk"
            );
        }
        flagged
    }
}

impl<S> fmt::Debug for FraudLookup<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FraudLookup").finish_non_exhaustive()
    }
}
