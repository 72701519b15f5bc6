use catalog_api::app_data::AppData;
use catalog_api::cli::{self, Cli, Commands};
use catalog_api::config::{init_logging, BootstrapSettings};
use catalog_api::errors::InternalError;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), InternalError> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Keep stdout clean when printing the OpenAPI document
    if !matches!(cli.command, Some(Commands::Spec { .. })) {
        init_logging()?;
    }

    let settings = BootstrapSettings::from_env()?;
    tracing::debug!(?settings, "Bootstrap settings loaded");

    let app_data = AppData::init(&settings);

    cli::execute_command(cli, &settings, &app_data).await
}
