use std::collections::BTreeMap;

use alloy::primitives::ChainId;

use txmodal_core::{ExplorerLinkKind, ExplorerLinkPort, PortError};

use crate::ModalConfig;

/// Builds etherscan-style explorer URLs by chain id.
#[derive(Debug, Clone, Default)]
pub struct ExplorerAdapter {
    overrides: BTreeMap<ChainId, String>,
}

impl ExplorerAdapter {
    pub fn with_config(config: &ModalConfig) -> Self {
        Self {
            overrides: config.explorer_overrides.clone(),
        }
    }

    pub fn base_url(&self, chain_id: ChainId) -> Option<&str> {
        if let Some(url) = self.overrides.get(&chain_id) {
            return Some(url.trim_end_matches('/'));
        }
        builtin_base_url(chain_id)
    }
}

impl ExplorerLinkPort for ExplorerAdapter {
    fn build_link(
        &self,
        chain_id: ChainId,
        data: &str,
        kind: ExplorerLinkKind,
    ) -> Result<String, PortError> {
        let data = data.trim();
        if data.is_empty() {
            return Err(PortError::Validation(format!(
                "empty {} for explorer link",
                kind.as_str()
            )));
        }
        let base = self
            .base_url(chain_id)
            .ok_or(PortError::UnsupportedChain(chain_id))?;
        Ok(format!("{}/{}/{}", base, path_segment(kind), data))
    }
}

fn path_segment(kind: ExplorerLinkKind) -> &'static str {
    match kind {
        ExplorerLinkKind::Transaction => "tx",
        ExplorerLinkKind::Token => "token",
        ExplorerLinkKind::Address => "address",
        ExplorerLinkKind::Block => "block",
    }
}

fn builtin_base_url(chain_id: ChainId) -> Option<&'static str> {
    let base = match chain_id {
        // Mainnets
        1 => "https://etherscan.io",
        10 => "https://optimistic.etherscan.io",
        56 => "https://bscscan.com",
        100 => "https://gnosisscan.io",
        137 => "https://polygonscan.com",
        250 => "https://ftmscan.com",
        324 => "https://explorer.zksync.io",
        8453 => "https://basescan.org",
        42161 => "https://arbiscan.io",
        42220 => "https://celoscan.io",
        43114 => "https://snowtrace.io",
        59144 => "https://lineascan.build",
        534352 => "https://scrollscan.com",
        // Testnets
        84532 => "https://sepolia.basescan.org",
        11155111 => "https://sepolia.etherscan.io",
        _ => return None,
    };
    Some(base)
}
