use serde::{Deserialize, Serialize};

/// Applicant details submitted for a credit card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardApplication {
    #[serde(default)]
    pub gross_annual_income: u64,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub frequent_flyer_number: String,
}

impl CreditCardApplication {
    pub fn new(
        gross_annual_income: u64,
        age: u32,
        frequent_flyer_number: impl Into<String>,
    ) -> Self {
        Self {
            gross_annual_income,
            age,
            frequent_flyer_number: frequent_flyer_number.into(),
        }
    }
}
