use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub intake: IntakeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

/// Where the module store and static assets live, relative to the working directory.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_modules_file")]
    pub modules_file: String,
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,
}

fn default_data_dir() -> String { "data".into() }
fn default_modules_file() -> String { "modules.json".into() }
fn default_frontend_dir() -> String { "frontend".into() }

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            modules_file: default_modules_file(),
            frontend_dir: default_frontend_dir(),
        }
    }
}

/// Server-side checks on `POST /api/modules`. Off by default: the form is trusted.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct IntakeConfig {
    #[serde(default)]
    pub strict_validation: bool,
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `CONFIG_PATH` (default `config.toml`) and validate it.
    ///
    /// Only a missing file falls back to defaults overlaid with `SERVER_HOST`,
    /// `SERVER_PORT`, `DATA_DIR` and `TOKIO_WORKER_THREADS`; an unreadable or
    /// malformed file is an error.
    pub fn load_or_env() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_or_env_from(&path)
    }

    pub fn load_or_env_from(path: &str) -> Result<Self> {
        let mut cfg = match std::fs::read_to_string(path) {
            Ok(content) => parse(&content).map_err(|e| anyhow!("{path}: {e}"))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Self::from_env(),
            Err(e) => return Err(anyhow!("cannot read {path}: {e}")),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        if let Ok(dir) = std::env::var("DATA_DIR") {
            cfg.storage.data_dir = dir;
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.validate()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.trim().is_empty() {
            return Err(anyhow!("storage.data_dir must not be empty"));
        }
        let file = self.modules_file.trim();
        if file.is_empty() {
            return Err(anyhow!("storage.modules_file must not be empty"));
        }
        if Path::new(file).components().count() != 1 || file == "." || file == ".." {
            return Err(anyhow!("storage.modules_file must be a bare file name, got {file:?}"));
        }
        Ok(())
    }

    /// `<data_dir>/<modules_file>`, e.g. `data/modules.json`.
    pub fn modules_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.modules_file)
    }
}
