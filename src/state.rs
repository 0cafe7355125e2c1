//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

use crate::config::AppConfig;
use crate::environment::ConfigProvider;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// The environment provider is consulted on every request rather than
/// resolved once, so the descriptor always reflects current configuration.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tera: Arc<Tera>,
    pub env: Arc<dyn ConfigProvider>,
}

impl AppState {
    pub fn new(config: AppConfig, tera: Tera, env: impl ConfigProvider + 'static) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
            env: Arc::new(env),
        }
    }
}
