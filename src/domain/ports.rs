use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Resolves the secret key bound to an account identifier.
#[async_trait]
pub trait KeyStore: Send + Sync {
    async fn secret_key(&self, account: &str) -> Result<Option<Value>>;
}

pub type KeyStoreBox = Box<dyn KeyStore>;
