// CLI module: server startup and offline tooling

pub mod serve;
pub mod spec;

use clap::{Parser, Subcommand};

use crate::app_data::AppData;
use crate::config::BootstrapSettings;
use crate::errors::InternalError;

/// Catalog service CLI
#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(about = "Item catalog HTTP API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Print the OpenAPI document and exit
    Spec {
        /// Emit YAML instead of JSON
        #[arg(long)]
        yaml: bool,
    },
}

/// Execute CLI command
///
/// Runs the server when no subcommand is given.
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `settings` - Bootstrap settings loaded from the environment
/// * `app_data` - Application data holding the item repository
pub async fn execute_command(
    cli: Cli,
    settings: &BootstrapSettings,
    app_data: &AppData,
) -> Result<(), InternalError> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::run_server(settings, app_data).await,
        Commands::Spec { yaml } => {
            println!("{}", spec::render_spec(settings, app_data, yaml));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["catalog"]).unwrap();

        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_spec_yaml_flag() {
        let cli = Cli::try_parse_from(["catalog", "spec", "--yaml"]).unwrap();

        assert_eq!(cli.command, Some(Commands::Spec { yaml: true }));
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["catalog", "bootstrap"]).is_err());
    }
}
