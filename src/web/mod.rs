//! HTTP surface: five routes over the cafe table.

pub mod handlers;
pub mod state;
pub mod views;

use crate::config::Config;
use crate::errors::AppResult;
use axum::Router;
use axum::routing::get;
use handlers::{
    add_form_handler, add_submit_handler, cafes_handler, edit_form_handler, edit_submit_handler,
    home_handler, report_closed_handler,
};
use state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/add", get(add_form_handler).post(add_submit_handler))
        .route("/cafes", get(cafes_handler))
        .route(
            "/update/{id}",
            get(edit_form_handler)
                .post(edit_submit_handler)
                .patch(edit_submit_handler),
        )
        .route(
            "/report-closed/{id}",
            get(report_closed_handler)
                .post(report_closed_handler)
                .delete(report_closed_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Install the global tracing subscriber with the configured filter
/// directive. Calling it twice is harmless.
pub fn init_tracing(filter: &str) {
    let _ = fmt().with_env_filter(EnvFilter::new(filter)).try_init();
}

/// Open the database, create the schema if needed and serve until Ctrl+C / SIGTERM.
pub async fn serve(cfg: &Config) -> AppResult<()> {
    init_tracing(&cfg.log_filter);

    info!("Opening database {}", cfg.database);
    let state = AppState::open(&cfg.database)?;

    let app = build_router(state);

    let address = cfg.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
