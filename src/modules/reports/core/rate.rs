use crate::modules::catalog::core::model::{BillingDetails, Contract};
use serde::{Deserialize, Serialize};

pub const FALLBACK_CURRENCY: &str = "USD";
pub const HOURS_PER_WORKDAY: f64 = 8.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingRate {
    pub daily_rate: f64,
    pub currency: String,
}

impl BillingRate {
    pub fn hourly_rate(&self) -> f64 {
        self.daily_rate / HOURS_PER_WORKDAY
    }
}

/// Billing carried by a contract. Either part may be missing on records the
/// contract store returns partially.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractBilling {
    pub daily_rate: Option<f64>,
    pub currency: Option<String>,
}

impl From<&Contract> for ContractBilling {
    fn from(contract: &Contract) -> Self {
        Self {
            daily_rate: Some(contract.daily_rate),
            currency: Some(contract.currency.clone()),
        }
    }
}

/// A present contract rate wins even when it is zero. Only a missing contract
/// or a missing rate falls back to the customer default.
pub fn resolve_daily_rate(
    contract: Option<&ContractBilling>,
    customer_default: &BillingDetails,
) -> BillingRate {
    let daily_rate = contract
        .and_then(|c| c.daily_rate)
        .unwrap_or(customer_default.daily_rate);
    let currency = contract
        .and_then(|c| c.currency.clone())
        .or_else(|| customer_default.currency.clone())
        .unwrap_or_else(|| FALLBACK_CURRENCY.to_string());
    BillingRate {
        daily_rate,
        currency,
    }
}
