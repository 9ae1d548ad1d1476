use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value as JsonValue;

use super::HighscoreStore;

/// Process-local store for development and tests; contents are lost on exit.
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<String, JsonValue>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HighscoreStore for InMemoryStore {
    async fn read(&self, key: &str) -> Result<Option<JsonValue>> {
        let value = self.records.read().get(key).cloned();
        tracing::debug!("Read key {:?} (found: {})", key, value.is_some());
        Ok(value)
    }

    async fn write(&self, key: &str, payload: JsonValue) -> Result<JsonValue> {
        self.records.write().insert(key.to_string(), payload.clone());
        tracing::debug!("Wrote key {:?}", key);
        Ok(payload)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
