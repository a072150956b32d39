use alloy::primitives::ChainId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Token;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PortError {
    #[error("port not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("unsupported chain: {0}")]
    UnsupportedChain(ChainId),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("transport error: {0}")]
    Transport(String),
}

/// Kind of explorer page a link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExplorerLinkKind {
    Transaction,
    Token,
    Address,
    Block,
}

impl ExplorerLinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExplorerLinkKind::Transaction => "transaction",
            ExplorerLinkKind::Token => "token",
            ExplorerLinkKind::Address => "address",
            ExplorerLinkKind::Block => "block",
        }
    }
}

pub trait ExplorerLinkPort {
    fn build_link(
        &self,
        chain_id: ChainId,
        data: &str,
        kind: ExplorerLinkKind,
    ) -> Result<String, PortError>;
}

/// Fire-and-observe wallet watch-asset request.
pub trait WatchAssetPort {
    fn add_token(&self, token: &Token) -> Result<(), PortError>;
    fn success(&self, token: &Token) -> bool;
    /// Why the most recent request for `token` failed, until a retry succeeds.
    fn failure(&self, token: &Token) -> Option<String>;
}

impl<T: ExplorerLinkPort + ?Sized> ExplorerLinkPort for &T {
    fn build_link(
        &self,
        chain_id: ChainId,
        data: &str,
        kind: ExplorerLinkKind,
    ) -> Result<String, PortError> {
        (**self).build_link(chain_id, data, kind)
    }
}

impl<T: WatchAssetPort + ?Sized> WatchAssetPort for &T {
    fn add_token(&self, token: &Token) -> Result<(), PortError> {
        (**self).add_token(token)
    }

    fn success(&self, token: &Token) -> bool {
        (**self).success(token)
    }

    fn failure(&self, token: &Token) -> Option<String> {
        (**self).failure(token)
    }
}
