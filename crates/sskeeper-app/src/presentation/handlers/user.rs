use actix_web::{delete, get, post, web, HttpResponse};
use tracing::debug;

use crate::application::dtos::CreateUserInput;
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

#[post("/user")]
pub async fn create_user(
    state: web::Data<AppState>,
    input: web::Json<CreateUserInput>,
) -> Result<HttpResponse, ApiError> {
    debug!(user_id = %input.user_id, "Create user requested");

    let user = state.user_service.create_user(input.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[get("/user/{user_id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user = state.user_service.get_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[delete("/user/{user_id}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    state.user_service.delete_user(&user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/users")]
pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let users = state.user_service.list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}
