use super::account::Amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Why a payment could not be charged to any account.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    #[error("Insufficient funds")]
    InsufficientFunds,
    #[error("Invalid amount (must be positive)")]
    InvalidAmount,
}

/// A caller's request to pay `amount`.
///
/// The amount is taken as given and validated by the router.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PaymentRequest {
    #[serde(rename = "payment")]
    pub payment_id: u32,
    pub amount: Decimal,
}

impl PaymentRequest {
    pub fn new(payment_id: u32, amount: Decimal) -> Self {
        Self { payment_id, amount }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PaymentOutcome {
    Success {
        payment_id: u32,
        account: String,
        secret_key: Option<Value>,
        amount: Amount,
    },
    Failure {
        payment_id: u32,
        reason: FailureReason,
    },
}

impl PaymentOutcome {
    pub fn payment_id(&self) -> u32 {
        match self {
            PaymentOutcome::Success { payment_id, .. } | PaymentOutcome::Failure { payment_id, .. } => {
                *payment_id
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PaymentOutcome::Success { .. })
    }

    /// The charged amount, for successful outcomes.
    pub fn amount(&self) -> Option<Amount> {
        match self {
            PaymentOutcome::Success { amount, .. } => Some(*amount),
            PaymentOutcome::Failure { .. } => None,
        }
    }
}
