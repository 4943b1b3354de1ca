use crate::domain::account::{Account, Amount};
use crate::domain::payment::{FailureReason, PaymentOutcome, PaymentRequest};
use crate::domain::ports::KeyStoreBox;
use crate::domain::router::RouterState;
use crate::error::Result;
use tokio::sync::Mutex;

/// Routes payments across a fixed, ordered list of accounts.
///
/// Each request is charged in full to the first account whose balance
/// covers it. Router state sits behind a mutex that is held for the whole
/// of one `route` call, so debits against the same router are serialized.
pub struct PaymentRouter {
    state: Mutex<RouterState>,
    key_store: KeyStoreBox,
}

impl PaymentRouter {
    /// Creates a new `PaymentRouter`.
    ///
    /// # Arguments
    ///
    /// * `accounts` - The accounts in fallback order, first tried first.
    /// * `key_store` - Resolves the secret key of the account that pays.
    pub fn new(accounts: Vec<Account>, key_store: KeyStoreBox) -> Self {
        Self {
            state: Mutex::new(RouterState::new(accounts)),
            key_store,
        }
    }

    /// Routes a single payment request.
    ///
    /// Successful outcomes are appended to the history. Failures are
    /// returned but never recorded.
    pub async fn route(&self, request: PaymentRequest) -> Result<PaymentOutcome> {
        let PaymentRequest { payment_id, amount } = request;

        let amount = match Amount::new(amount) {
            Ok(amount) => amount,
            Err(reason) => return Ok(rejected(payment_id, reason)),
        };

        let mut state = self.state.lock().await;

        let Some((index, identifier)) = state
            .first_covering(amount)
            .and_then(|index| Some((index, state.account(index)?.identifier.clone())))
        else {
            return Ok(rejected(payment_id, FailureReason::InsufficientFunds));
        };
        tracing::debug!(payment_id, account = %identifier, "account selected");

        let secret_key = self.key_store.secret_key(&identifier).await?;
        if secret_key.is_none() {
            tracing::warn!(account = %identifier, "no secret key found for account");
        }

        // The guard is still held, so the selected account still covers the amount.
        let Some(outcome) = state.commit(index, payment_id, amount, secret_key) else {
            return Ok(rejected(payment_id, FailureReason::InsufficientFunds));
        };
        tracing::info!(payment_id, account = %identifier, amount = %amount.value(), "payment routed");

        Ok(outcome)
    }

    /// Routes requests one after another, in submission order.
    pub async fn route_all<I>(&self, requests: I) -> Result<Vec<PaymentOutcome>>
    where
        I: IntoIterator<Item = PaymentRequest>,
    {
        let mut outcomes = Vec::new();
        for request in requests {
            outcomes.push(self.route(request).await?);
        }
        Ok(outcomes)
    }

    /// Successful outcomes, oldest first.
    pub async fn list_history(&self) -> Vec<PaymentOutcome> {
        self.state.lock().await.history().to_vec()
    }

    /// A snapshot of every account, in fallback order.
    pub async fn accounts(&self) -> Vec<Account> {
        self.state.lock().await.accounts().to_vec()
    }
}

fn rejected(payment_id: u32, reason: FailureReason) -> PaymentOutcome {
    tracing::info!(payment_id, "payment rejected: {}", reason);
    PaymentOutcome::Failure { payment_id, reason }
}
