//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::warn;

/// Ensure the data directory exists; warn when the optional frontend assets are missing.
pub async fn ensure_env(frontend_dir: &str, data_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(frontend_dir).await.is_err() {
        warn!(%frontend_dir, "frontend assets directory not found; static assets may 404");
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_data_dir() -> anyhow::Result<()> {
        let root = std::env::temp_dir().join(format!("codedale_env_{}", uuid::Uuid::new_v4()));
        let data = root.join("data");
        let frontend = root.join("frontend");

        ensure_env(&frontend.to_string_lossy(), &data.to_string_lossy()).await?;
        assert!(tokio::fs::metadata(&data).await?.is_dir());

        // second call is a no-op
        ensure_env(&frontend.to_string_lossy(), &data.to_string_lossy()).await?;

        let _ = tokio::fs::remove_dir_all(&root).await;
        Ok(())
    }
}
