//! Store double for route tests: records every call and returns canned values.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value as JsonValue;

use super::HighscoreStore;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Read(String),
    Write(String, JsonValue),
}

#[derive(Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<StoreCall>>,
    read_reply: Option<JsonValue>,
    write_reply: Option<JsonValue>,
    failing: bool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every read answers with `value`.
    pub fn with_read_reply(mut self, value: JsonValue) -> Self {
        self.read_reply = Some(value);
        self
    }

    /// Every write answers with `value` instead of echoing the payload.
    pub fn with_write_reply(mut self, value: JsonValue) -> Self {
        self.write_reply = Some(value);
        self
    }

    /// Every call fails after being recorded.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl HighscoreStore for RecordingStore {
    async fn read(&self, key: &str) -> Result<Option<JsonValue>> {
        self.calls.lock().push(StoreCall::Read(key.to_string()));
        if self.failing {
            return Err(anyhow!("store unavailable"));
        }
        Ok(self.read_reply.clone())
    }

    async fn write(&self, key: &str, payload: JsonValue) -> Result<JsonValue> {
        self.calls
            .lock()
            .push(StoreCall::Write(key.to_string(), payload.clone()));
        if self.failing {
            return Err(anyhow!("store unavailable"));
        }
        Ok(self.write_reply.clone().unwrap_or(payload))
    }

    async fn health_check(&self) -> Result<()> {
        if self.failing {
            return Err(anyhow!("store unavailable"));
        }
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "recording"
    }
}
