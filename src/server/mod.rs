//! HTTP server exposing the research assistant
//!
//! Only the report pipeline's runnable routes are served; there is no
//! health check, static content or auth layer.

pub mod routes;
pub mod state;

pub use routes::ASSISTANT_PATH;
pub use state::ServerAppState;

use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderValue,
    },
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;

/// Build the CORS layer; no configured origins means any origin
fn cors_layer(cors_origins: &[String]) -> CorsLayer {
    if cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers([CONTENT_TYPE, ACCEPT])
    } else {
        let allowed_origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|o| o.parse().ok()).collect();
        CorsLayer::new()
            .allow_origin(allowed_origins)
            .allow_methods(Any)
            .allow_headers([CONTENT_TYPE, ACCEPT])
    }
}

/// Build the application router
pub fn build_router(state: ServerAppState, cors_origins: &[String]) -> Router {
    routes::add_routes(Router::new(), ASSISTANT_PATH)
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

/// Run the HTTP server until shutdown is requested
pub async fn run_server(config: &ServerConfig, state: ServerAppState) -> Result<(), String> {
    let app = build_router(state.clone(), &config.cors_origins);

    let addr: SocketAddr = format!("{}:{}", config.bind, config.port)
        .parse()
        .map_err(|e| format!("Invalid address: {}", e))?;

    let cors_display = if config.cors_origins.is_empty() {
        "*".to_string()
    } else {
        config.cors_origins.join(", ")
    };

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Research Assistant                         ║");
    println!("╠══════════════════════════════════════════════════════════════╣");
    println!("║  Server URL: http://{:<41}║", addr);
    println!("║  CORS Origins: {:<46}║", cors_display);
    println!("║                                                               ║");
    println!("║  Endpoints:                                                   ║");
    println!("║    POST {}/invoke                                     ║", ASSISTANT_PATH);
    println!("║    POST {}/batch                                      ║", ASSISTANT_PATH);
    println!("║    POST {}/stream                                     ║", ASSISTANT_PATH);
    println!("║    GET  {}/input_schema                               ║", ASSISTANT_PATH);
    println!("║    GET  {}/output_schema                              ║", ASSISTANT_PATH);
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    log::info!("[server] Listening on http://{}", addr);

    let shutdown_state = state.shutdown_state.clone();
    let shutdown_signal = async move {
        shutdown_state.wait().await;
        log::info!("[server] Shutdown signal received, stopping server...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| format!("Server error: {}", e))
}
