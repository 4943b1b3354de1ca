use crate::domain::account::{Account, Balance};
use crate::domain::payment::PaymentRequest;
use crate::error::SiteDataError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

/// Where both tools look for the site-data document by default.
pub const DEFAULT_DOCUMENT_PATH: &str = "sitedata.json";

/// Environment variable overriding the document path.
pub const DOCUMENT_PATH_ENV: &str = "SITEDATA_FILE";

/// An account to open on the router, parsed from `ID=BALANCE`.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSpec {
    pub identifier: String,
    pub opening_balance: Balance,
}

impl AccountSpec {
    pub fn new(identifier: impl Into<String>, opening_balance: Decimal) -> Self {
        Self {
            identifier: identifier.into(),
            opening_balance: Balance::new(opening_balance),
        }
    }

    pub fn open(&self) -> Account {
        Account::new(self.identifier.clone(), self.opening_balance)
    }
}

impl FromStr for AccountSpec {
    type Err = SiteDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (identifier, balance) = s
            .split_once('=')
            .ok_or_else(|| SiteDataError::InvalidAccount(format!("expected ID=BALANCE, got '{s}'")))?;

        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(SiteDataError::InvalidAccount(format!(
                "missing account identifier in '{s}'"
            )));
        }

        let balance = Decimal::from_str(balance.trim()).map_err(|e| {
            SiteDataError::InvalidAccount(format!("bad balance in '{s}': {e}"))
        })?;
        if balance < Decimal::ZERO {
            return Err(SiteDataError::InvalidAccount(format!(
                "balance must not be negative in '{s}'"
            )));
        }

        Ok(Self::new(identifier, balance))
    }
}

/// Accounts the payments simulation opens when none are given.
pub fn default_accounts() -> Vec<AccountSpec> {
    vec![
        AccountSpec::new("token1", dec!(1000)),
        AccountSpec::new("token2", dec!(2000)),
    ]
}

/// Requests the payments simulation runs when no input file is given.
pub fn default_requests() -> Vec<PaymentRequest> {
    (1..=6).map(|id| PaymentRequest::new(id, dec!(500))).collect()
}
