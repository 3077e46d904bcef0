use actix_web::{web, App, HttpServer};
use anyhow::Result;
use tracing::info;

use crate::presentation::handlers::routes;
use crate::presentation::state::AppState;

/// Serve the management API until the process receives SIGINT/SIGTERM.
pub async fn serve(state: AppState, bind: &str) -> Result<()> {
    let state = web::Data::new(state);

    info!(bind = %bind, "Management API listening");

    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes))
        .bind(bind)?
        .run()
        .await?;

    info!("Management API stopped");
    Ok(())
}
