use std::collections::BTreeMap;
use std::path::Path;

use alloy::primitives::ChainId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use txmodal_core::{
    ConfirmationModal, ExplorerLinkPort, PendingContext, WatchAssetPort, DEFAULT_PENDING_TEXT,
};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV_VAR: &str = "TXMODAL_CONFIG";

/// Widest hash half shown; a 32-byte hash has 64 hex digits.
pub const MAX_HASH_DISPLAY_CHARS: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub max_height_percent: f32,
    pub pending_fallback_text: String,
    /// Extra or replacement explorer base URLs keyed by chain id.
    pub explorer_overrides: BTreeMap<ChainId, String>,
    pub hash_display_chars: usize,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            max_height_percent: 90.0,
            pending_fallback_text: DEFAULT_PENDING_TEXT.to_owned(),
            explorer_overrides: BTreeMap::new(),
            hash_display_chars: 6,
        }
    }
}

impl ModalConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Defaults unless `TXMODAL_CONFIG` points at a file.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => {
                tracing::info!(%path, "loading dialog config");
                Self::from_path(path.trim())
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_height_percent > 0.0 && self.max_height_percent <= 100.0) {
            return Err(ConfigError::Invalid(format!(
                "max_height_percent must be in (0, 100], got {}",
                self.max_height_percent
            )));
        }
        if self.hash_display_chars == 0 || self.hash_display_chars > MAX_HASH_DISPLAY_CHARS {
            return Err(ConfigError::Invalid(format!(
                "hash_display_chars must be in 1..={MAX_HASH_DISPLAY_CHARS}, got {}",
                self.hash_display_chars
            )));
        }
        for (chain_id, url) in &self.explorer_overrides {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                return Err(ConfigError::Invalid(format!(
                    "explorer override for chain {chain_id} is not an http(s) url: {url}"
                )));
            }
        }
        Ok(())
    }

    /// Apply display settings to a dialog built from any adapters.
    pub fn configure<L, W>(&self, mut modal: ConfirmationModal<L, W>) -> ConfirmationModal<L, W>
    where
        L: ExplorerLinkPort,
        W: WatchAssetPort,
    {
        modal.max_height_percent = self.max_height_percent;
        modal.hash_display_chars = self.hash_display_chars;
        modal.fallback_pending = PendingContext::new(self.pending_fallback_text.clone(), "");
        modal
    }
}
