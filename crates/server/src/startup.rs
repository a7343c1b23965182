use axum::Router;
use configs::AppConfig;
use service::{runtime, FileModuleStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the file-backed module store named by the config and wrap it in server state.
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    cfg.storage.validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let store = FileModuleStore::new(cfg.storage.modules_path()).await?;
    Ok(ServerState::new(store).with_strict_validation(cfg.intake.strict_validation))
}

/// Prepare directories and state, then build the router for `cfg`.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    runtime::ensure_env(&cfg.storage.frontend_dir, &cfg.storage.data_dir).await?;
    let state = build_state(cfg).await?;
    Ok(routes::build_router(state, build_cors(), &cfg.storage.frontend_dir))
}

/// Public entry: build the app for `cfg` and serve it until the listener fails
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let listener = TcpListener::bind(cfg.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(
        %addr,
        store = %cfg.storage.modules_path().display(),
        strict_validation = cfg.intake.strict_validation,
        "starting module server"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
