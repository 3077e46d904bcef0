use actix_web::web;

pub mod system;
pub mod user;

/// Register every route of the management API
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(user::create_user)
        .service(user::get_user)
        .service(user::delete_user)
        .service(user::list_users)
        .service(system::restart_server);
}
