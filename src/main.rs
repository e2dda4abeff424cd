use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    extract::{Extension, State},
    routing::{MethodFilter, get, on},
};
use juniper_axum::{extract::JuniperRequest, graphiql, playground, response::JuniperResponse};
use sea_orm::DatabaseConnection;
use tokio::{net::TcpListener, signal};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::CONFIG;
use crate::state::AppState;
use crate::{setup::SetupResult, state::AppData};

mod config;
mod errors;
mod input;
mod migration;
mod schema;
mod setup;
mod state;
mod store;

async fn graphql(
    State(state): State<AppState>,
    Extension(schema): Extension<Arc<schema::Schema<'static>>>,
    JuniperRequest(request): JuniperRequest,
) -> JuniperResponse {
    let app_data = AppData::new(state.db.clone());
    JuniperResponse(request.execute(&schema, &app_data).await)
}

fn app(db: DatabaseConnection) -> Router {
    let schema = schema::schema();
    let app_state = AppState::new(AppData::new(db));

    Router::new()
        .route("/", on(MethodFilter::GET.or(MethodFilter::POST), graphql))
        .route("/graphiql", get(graphiql("/", None::<&str>)))
        .route("/playground", get(playground("/", None::<&str>)))
        .with_state(app_state)
        .layer(Extension(Arc::new(schema)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Ctrl+C received, shutting down"),
        _ = terminate => info!("SIGTERM received, shutting down"),
    }
}

async fn run() -> anyhow::Result<()> {
    let SetupResult { db } = setup::setup_all().await?;

    let addr = CONFIG.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app(db))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
