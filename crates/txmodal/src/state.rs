//! Demo host state
//!
//! Owns the transaction lifecycle the dialog displays. The dialog itself never
//! stores any of this.

use alloy::primitives::{keccak256, Address, ChainId};
use txmodal_core::{
    ActiveSession, Currency, DismissHandle, DisplayTracker, PendingContext, StateTransition,
    Token,
};

pub const CONFIRM_SWAP_ACTION: &str = "confirm_swap";

/// Chains offered in the demo chain selector. `None` simulates a disconnected wallet.
pub const DEMO_CHAINS: &[(Option<ChainId>, &str)] = &[
    (Some(1), "Ethereum"),
    (Some(10), "Optimism"),
    (Some(137), "Polygon"),
    (Some(42161), "Arbitrum"),
    (Some(8453), "Base"),
    (Some(31337), "Local devnet (no explorer)"),
    (None, "Disconnected"),
];

#[derive(Debug)]
pub struct DemoTxState {
    pub is_open: bool,
    pub attempting_txn: bool,
    pub hash: Option<String>,
    pub error: Option<String>,
    pub session: ActiveSession,
    pub pending: PendingContext,
    pub offer_token: bool,
    pub currency_to_add: Currency,
    pub dismiss: DismissHandle,
    pub tracker: DisplayTracker,
    nonce: u64,
}

impl Default for DemoTxState {
    fn default() -> Self {
        Self {
            is_open: true,
            attempting_txn: false,
            hash: None,
            error: None,
            session: ActiveSession::on_chain(1),
            pending: PendingContext::new("Swapping 1.0 ETH for 3,012.44 SUSHI", ""),
            offer_token: true,
            currency_to_add: Currency::Token(Token {
                chain_id: 1,
                address: Address::new([
                    0x6b, 0x35, 0x95, 0x06, 0x87, 0x78, 0xdd, 0x59, 0x2e, 0x39, 0xa1, 0x22, 0xf4,
                    0xf5, 0xa5, 0xcf, 0x09, 0xc9, 0x0f, 0xe2,
                ]),
                symbol: "SUSHI".to_owned(),
                decimals: 18,
                logo_uri: None,
            }),
            dismiss: DismissHandle::detached(),
            tracker: DisplayTracker::default(),
            nonce: 0,
        }
    }
}

impl DemoTxState {
    pub fn start_attempt(&mut self) {
        self.error = None;
        self.hash = None;
        self.attempting_txn = true;
        tracing::info!("waiting for wallet signature");
    }

    /// Finish the attempt with a freshly derived transaction hash.
    pub fn submit(&mut self) -> String {
        self.nonce += 1;
        let hash = keccak256(format!("txmodal-demo-{}", self.nonce)).to_string();
        self.attempting_txn = false;
        self.error = None;
        self.hash = Some(hash.clone());
        tracing::info!(%hash, "transaction submitted");
        hash
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.attempting_txn = false;
        self.hash = None;
        tracing::info!(%message, "transaction failed");
        self.error = Some(message);
    }

    pub fn reset(&mut self) {
        self.attempting_txn = false;
        self.hash = None;
        self.error = None;
    }

    /// Reopening issues a fresh dismiss handle so the previous one stays spent.
    pub fn reopen(&mut self) {
        self.dismiss = DismissHandle::detached();
        self.is_open = true;
        self.tracker.reopen(self.tracker.current());
    }

    /// Pick up a dismissal triggered by the dialog since the last frame.
    pub fn sync_dismiss(&mut self) -> bool {
        if self.is_open && self.dismiss.is_dismissed() {
            self.is_open = false;
            self.tracker.close();
            tracing::info!("confirmation dialog closed");
            return true;
        }
        false
    }

    pub fn token_to_add(&self) -> Option<&Currency> {
        self.offer_token.then_some(&self.currency_to_add)
    }

    pub fn watchable_token(&self) -> Option<&Token> {
        self.token_to_add().and_then(Currency::as_token)
    }

    pub fn history(&self) -> &[StateTransition] {
        self.tracker.history()
    }

    pub fn chain_label(&self) -> &'static str {
        DEMO_CHAINS
            .iter()
            .find(|(id, _)| *id == self.session.chain_id)
            .map(|(_, name)| *name)
            .unwrap_or("Unknown")
    }
}
