use std::sync::Arc;

use crate::api::ApiError;
use crate::config::AppConfig;
use crate::upstream::UpstreamClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// None when no upstream credential was configured at startup.
    pub upstream: Option<Arc<dyn UpstreamClient>>,
}

impl AppState {
    /// The upstream client, or a configuration error when the credential
    /// is absent.
    pub fn upstream(&self) -> Result<&Arc<dyn UpstreamClient>, ApiError> {
        self.upstream.as_ref().ok_or_else(|| {
            ApiError::Configuration("Upstream API credential is not configured".to_string())
        })
    }
}
