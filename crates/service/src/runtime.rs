//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so the server crate can prepare its
//! directories without depending directly on `common`.

/// Ensure the data directory exists; warn on a missing frontend directory.
pub async fn ensure_env(frontend_dir: &str, data_dir: &str) -> anyhow::Result<()> {
    common::env::ensure_env(frontend_dir, data_dir).await
}
