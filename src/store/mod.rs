//! Key-value backends behind the highscore routes.

pub mod memory;
pub mod spanner;

#[cfg(test)]
pub mod recording;

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::config::{Config, StoreBackend};

pub use memory::InMemoryStore;
pub use spanner::SpannerStore;

/// Async key-value capability the route layer delegates to.
#[async_trait]
pub trait HighscoreStore: Send + Sync {
    /// Reads the value stored under `key`, or `None` when nothing is stored.
    async fn read(&self, key: &str) -> Result<Option<JsonValue>>;

    /// Stores `payload` under `key`, replacing any previous value, and returns
    /// the value as stored.
    async fn write(&self, key: &str, payload: JsonValue) -> Result<JsonValue>;

    /// Verifies the backend is reachable.
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    /// Short backend name used in logs and the health response.
    fn backend(&self) -> &'static str;
}

/// Builds the backend selected by `config.store_backend`.
pub async fn connect(config: &Config) -> Result<Arc<dyn HighscoreStore>> {
    let store: Arc<dyn HighscoreStore> = match config.store_backend {
        StoreBackend::Memory => Arc::new(InMemoryStore::new()),
        StoreBackend::Spanner => {
            let spanner = config
                .spanner
                .as_ref()
                .context("Spanner backend selected without Spanner settings")?;
            Arc::new(SpannerStore::from_config(spanner).await?)
        }
    };

    tracing::info!("Using {} highscore store", store.backend());
    Ok(store)
}
