// ABOUTME: Configuration loading for the adrsmith server.
// ABOUTME: Reads environment variables and resolves the real-mode credential chain.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ADRSMITH_BIND is not a valid socket address: {0}")]
    InvalidBind(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AdrConfig {
    /// Flat directory that receives `ADR-*.md` files.
    pub out_dir: PathBuf,
    pub bind: SocketAddr,
    /// Credential from the environment, if set and non-empty.
    pub api_key: Option<String>,
    /// Optional key file acting as a minimal secrets store.
    pub api_key_file: Option<PathBuf>,
}

impl AdrConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - ADRSMITH_OUT: output directory for generated ADRs (default: ./out)
    /// - ADRSMITH_BIND: socket address to bind (default: 127.0.0.1:7749)
    /// - OPENAI_API_KEY: real-mode credential (optional)
    /// - ADRSMITH_API_KEY_FILE: file holding the credential (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        let out_dir = std::env::var("ADRSMITH_OUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("out"));

        let bind_str =
            std::env::var("ADRSMITH_BIND").unwrap_or_else(|_| "127.0.0.1:7749".to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        let api_key = std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());

        let api_key_file = std::env::var("ADRSMITH_API_KEY_FILE")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            out_dir,
            bind,
            api_key,
            api_key_file,
        })
    }

    /// Resolve the real-mode credential: directly entered value first, then
    /// the environment, then the key file. First non-empty value wins; None
    /// means real mode is unusable for this interaction.
    pub fn resolve_api_key(&self, entered: Option<&str>) -> Option<String> {
        if let Some(entered) = entered {
            let entered = entered.trim();
            if !entered.is_empty() {
                return Some(entered.to_string());
            }
        }

        if let Some(key) = &self.api_key {
            return Some(key.clone());
        }

        if let Some(path) = &self.api_key_file
            && let Ok(contents) = std::fs::read_to_string(path)
        {
            let key = contents.trim();
            if !key.is_empty() {
                return Some(key.to_string());
            }
        }

        None
    }
}
