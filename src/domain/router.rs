use super::account::{Account, Amount};
use super::payment::PaymentOutcome;
use serde_json::Value;

/// Accounts in fallback order plus the record of successful payments.
///
/// Account order is fixed at construction. The router never re-sorts or
/// re-prioritizes accounts.
#[derive(Debug, Clone, Default)]
pub struct RouterState {
    accounts: Vec<Account>,
    history: Vec<PaymentOutcome>,
}

impl RouterState {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts,
            history: Vec::new(),
        }
    }

    /// Index of the first account, in fallback order, that covers `amount`.
    pub fn first_covering(&self, amount: Amount) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.balance.covers(amount))
    }

    /// Charges the account at `index` and records the success.
    ///
    /// Returns `None` if the index is out of range or the account can no
    /// longer cover the amount, in which case nothing is recorded.
    pub fn commit(
        &mut self,
        index: usize,
        payment_id: u32,
        amount: Amount,
        secret_key: Option<Value>,
    ) -> Option<PaymentOutcome> {
        let account = self.accounts.get_mut(index)?;
        account.debit(payment_id, amount).ok()?;

        let outcome = PaymentOutcome::Success {
            payment_id,
            account: account.identifier.clone(),
            secret_key,
            amount,
        };
        self.history.push(outcome.clone());
        Some(outcome)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, index: usize) -> Option<&Account> {
        self.accounts.get(index)
    }

    /// Successful outcomes in the order they were recorded.
    pub fn history(&self) -> &[PaymentOutcome] {
        &self.history
    }
}
