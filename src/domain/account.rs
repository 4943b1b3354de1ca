use super::payment::FailureReason;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub, SubAssign};

/// Represents a monetary balance held by an account.
///
/// This is a wrapper around `rust_decimal::Decimal` so balances and payment
/// amounts cannot be mixed up by accident.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

/// Represents a strictly positive amount requested by a payment.
///
/// Deserialization goes through [`Amount::new`], so a non-positive value
/// never becomes an `Amount`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, FailureReason> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(FailureReason::InvalidAmount)
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = FailureReason;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Whether this balance can cover `amount` in full.
    pub fn covers(&self, amount: Amount) -> bool {
        self.0 >= amount.0
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// One successful debit recorded on an account.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub payment_id: u32,
    pub amount: Amount,
}

/// A bank account taking part in payment routing.
///
/// The identifier doubles as the key used to resolve the account's secret
/// key. The ledger is append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque token identifying the account.
    pub identifier: String,
    /// Funds left on the account. Never negative.
    pub balance: Balance,
    /// Successful debits, oldest first.
    pub ledger: Vec<LedgerEntry>,
}

impl Account {
    pub fn new(identifier: impl Into<String>, balance: Balance) -> Self {
        Self {
            identifier: identifier.into(),
            balance,
            ledger: Vec::new(),
        }
    }

    /// Debits the account if the balance covers the full amount.
    ///
    /// Leaves the account untouched on failure.
    pub fn debit(&mut self, payment_id: u32, amount: Amount) -> Result<(), FailureReason> {
        if self.balance.covers(amount) {
            self.balance -= Balance::from(amount);
            self.ledger.push(LedgerEntry { payment_id, amount });
            Ok(())
        } else {
            Err(FailureReason::InsufficientFunds)
        }
    }

    /// Sum of every debit recorded in the ledger.
    pub fn debited(&self) -> Balance {
        self.ledger
            .iter()
            .fold(Balance::ZERO, |acc, entry| acc + Balance::from(entry.amount))
    }
}
