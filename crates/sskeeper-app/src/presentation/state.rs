use std::sync::Arc;

use crate::application::services::UserService;
use sskeeper_infrastructure::config::ServiceSettings;

/// Shared state handed to every HTTP handler through `web::Data`
pub struct AppState {
    pub settings: ServiceSettings,
    pub user_service: Arc<UserService>,
}
