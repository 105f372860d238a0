//! Binary entrypoint for the contactbook HTTP server.
//!
//! Always serves on port 8080 with the SQLite database `contacts.db` in the
//! working directory. There are no flags or environment variables.

use contactbook_server::config::ServerConfig;
use contactbook_server::router::build_router;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();
    let state = config
        .build_state()
        .expect("Failed to initialize application state");

    match state.store.count() {
        Ok(count) => tracing::info!(
            backend = state.store.backend_name(),
            contacts = count,
            "contact registry ready"
        ),
        Err(err) => tracing::warn!(error = %err, "could not count stored contacts"),
    }

    let app = build_router(state);

    let addr = config.addr();
    tracing::info!("Server is running on port {}", addr.port());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
