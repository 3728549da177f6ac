use std::sync::Arc;

use crate::config::Settings;
use crate::domain::services::credentials::CredentialVerifier;
use crate::domain::services::work_item_gateway::WorkItemGateway;
use crate::infrastructure::auth::jwt::JwtService;

/// Shared application resources used by use cases and middleware.
pub struct AppContext {
    pub gateway: Arc<dyn WorkItemGateway>,
    pub credentials: Arc<dyn CredentialVerifier>,
    pub tokens: Arc<JwtService>,
    pub settings: Settings,
}

impl AppContext {
    /// Build a new application context; settings are read-only from here on.
    pub fn new(
        gateway: Arc<dyn WorkItemGateway>,
        credentials: Arc<dyn CredentialVerifier>,
        settings: Settings,
    ) -> Self {
        let tokens = Arc::new(JwtService::new(&settings.jwt));
        Self {
            gateway,
            credentials,
            tokens,
            settings,
        }
    }
}
