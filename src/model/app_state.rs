use crate::model::configuration::CorsPolicy;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub cors_policy: Arc<CorsPolicy>,
}

impl AppState {
    pub fn new(cors_policy: CorsPolicy) -> Self {
        AppState {
            cors_policy: Arc::new(cors_policy),
        }
    }
}
