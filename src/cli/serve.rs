use std::time::Duration;

use poem::{listener::TcpListener, Server};

use crate::api::build_routes;
use crate::app_data::AppData;
use crate::config::BootstrapSettings;
use crate::errors::InternalError;

/// Run the HTTP server until Ctrl-C
pub async fn run_server(settings: &BootstrapSettings, app_data: &AppData) -> Result<(), InternalError> {
    let public_url = settings.public_url();
    let app = build_routes(app_data, &public_url);

    let address = settings.server_address();
    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at {}/swagger", public_url);
    tracing::info!("API endpoints available at {}/items", public_url);

    Server::new(TcpListener::bind(address))
        .run_with_graceful_shutdown(
            app,
            async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!("Failed to listen for shutdown signal: {}", e);
                }
                tracing::info!("Shutdown signal received");
            },
            Some(Duration::from_secs(5)),
        )
        .await
        .map_err(|e| InternalError::server("run_server", e))
}
