use crate::domain::document::Document;
use crate::domain::ports::KeyStore;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// A key-store backed by the loaded site-data document.
///
/// Shares the document through an `Arc`, so the lookup tool and the payment
/// router can read the same single load.
#[derive(Debug, Clone)]
pub struct DocumentKeyStore {
    document: Arc<Document>,
}

impl DocumentKeyStore {
    pub fn new(document: Arc<Document>) -> Self {
        Self { document }
    }
}

#[async_trait]
impl KeyStore for DocumentKeyStore {
    async fn secret_key(&self, account: &str) -> Result<Option<Value>> {
        Ok(self.document.get(account).cloned())
    }
}
