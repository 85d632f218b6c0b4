//! REST server implementation

use axum::routing::get;
use axum::Router;

use super::api;

/// Build the service router
pub fn app() -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/flight/:code", get(api::get_flight))
}

/// The REST Server for this service
pub async fn rest_server(
    config: crate::config::Config,
    shutdown_rx: Option<tokio::sync::oneshot::Receiver<()>>,
) {
    let rest_port = config.docker_port_rest;
    let full_rest_addr = format!("[::]:{rest_port}");

    let listener = match tokio::net::TcpListener::bind(&full_rest_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            rest_error!("(rest_server) could not bind to {}: {}.", full_rest_addr, e);
            return;
        }
    };

    //start server
    rest_info!("(rest_server) starting REST server at {}.", full_rest_addr);
    if let Err(e) = axum::serve(listener, app())
        .with_graceful_shutdown(crate::shutdown_signal("rest", shutdown_rx))
        .await
    {
        rest_error!("(rest_server) server exited with error: {}.", e);
    }
}
