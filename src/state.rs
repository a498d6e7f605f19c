use crate::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init() -> Self {
        Self::from_config(AppConfig::from_env())
    }

    pub fn from_config(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn fake() -> Self {
        Self::from_config(AppConfig::default())
    }
}
