use anyhow::Context;
use clap::Parser;
use tracing::info;

use sskeeper_infrastructure::logging;
use sskeeper_lib::presentation::args::{Cli, Command};
use sskeeper_lib::presentation::bootstrap::build_app_state;
use sskeeper_lib::presentation::server::serve;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let options = cli.options;

    logging::init_logger(options.log_dir.as_deref()).context("Failed to initialize logging")?;
    if let Some(dir) = &options.log_dir {
        info!("File logging at: {}", logging::current_log_file(dir).display());
    }

    let state = build_app_state(options.to_settings());

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(state, &options.bind).await,
        Command::Normalize => {
            let normalized = state.user_service.normalize_config().await?;
            info!(
                config_path = %state.settings.config_path.display(),
                users = normalized.users().len(),
                "Config rewritten"
            );
            Ok(())
        }
    }
}
