use std::sync::Arc;

use crate::infra::config::Config;

/// Shared application state. Cheap to clone; handed to every handler by
/// the router.
#[derive(Clone, Debug)]
pub struct AppState {
    config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
