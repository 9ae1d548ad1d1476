use crate::config::Config;
use crate::store::HighscoreStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn HighscoreStore>,
    pub config: Arc<Config>,
}
