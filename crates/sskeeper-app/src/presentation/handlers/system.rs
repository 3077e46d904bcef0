use actix_web::{post, web, HttpResponse};

use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

/// Re-run the proxy restart, e.g. after a restart timed out
#[post("/restart-ss-server")]
pub async fn restart_server(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    state.user_service.restart_server().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({})))
}
