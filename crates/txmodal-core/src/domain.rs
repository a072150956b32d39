use alloy::primitives::{Address, ChainId};
use serde::{Deserialize, Serialize};

/// Fallback primary line shown while a signature is awaited.
pub const DEFAULT_PENDING_TEXT: &str = "Loading, please wait";

/// Which of the dialog's mutually exclusive views is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayState {
    Idle,
    Pending,
    Submitted,
    Error,
}

impl DisplayState {
    /// Root selector. Attempting wins over a hash; an empty hash counts as absent.
    ///
    /// `Error` is never produced here: it only appears when the caller routes an
    /// error through the content slot.
    pub fn derive(attempting_txn: bool, hash: Option<&str>) -> Self {
        if attempting_txn {
            DisplayState::Pending
        } else if hash.is_some_and(|h| !h.is_empty()) {
            DisplayState::Submitted
        } else {
            DisplayState::Idle
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayState::Idle => "idle",
            DisplayState::Pending => "pending",
            DisplayState::Submitted => "submitted",
            DisplayState::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingContext {
    pub primary_text: String,
    pub secondary_text: String,
}

impl PendingContext {
    pub fn new(primary_text: impl Into<String>, secondary_text: impl Into<String>) -> Self {
        Self {
            primary_text: primary_text.into(),
            secondary_text: secondary_text.into(),
        }
    }
}

impl Default for PendingContext {
    fn default() -> Self {
        Self::new(DEFAULT_PENDING_TEXT, "")
    }
}

/// ERC-20 metadata needed for a wallet watch-asset request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub chain_id: ChainId,
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
    pub logo_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Native { symbol: String, decimals: u8 },
    Token(Token),
}

impl Currency {
    pub fn symbol(&self) -> &str {
        match self {
            Currency::Native { symbol, .. } => symbol,
            Currency::Token(token) => &token.symbol,
        }
    }

    /// Native currencies cannot be added to a wallet.
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Currency::Native { .. } => None,
            Currency::Token(token) => Some(token),
        }
    }
}

/// Chain of the connected wallet, handed in by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSession {
    pub chain_id: Option<ChainId>,
}

impl ActiveSession {
    pub fn on_chain(chain_id: ChainId) -> Self {
        Self {
            chain_id: Some(chain_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedContext {
    pub chain_id: Option<ChainId>,
    pub transaction_hash: Option<String>,
    pub currency_to_add: Option<Currency>,
}

/// Shorten a hash for display: `0xabcdef...123456`.
pub fn truncate_hash(hash: &str, chars: usize) -> String {
    let body = hash.strip_prefix("0x").unwrap_or(hash);
    if chars == 0 || !body.is_ascii() || body.len() <= chars.saturating_mul(2) {
        return hash.to_owned();
    }
    format!("0x{}...{}", &body[..chars], &body[body.len() - chars..])
}
