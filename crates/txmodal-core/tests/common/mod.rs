#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use alloy::primitives::{Address, ChainId};

use txmodal_core::{
    ConfirmationModal, Currency, ExplorerLinkKind, ExplorerLinkPort, PortError, Token,
    WatchAssetPort,
};

/// Records every link request and answers with a fake etherscan-style URL.
#[derive(Debug, Default)]
pub struct RecordingExplorer {
    pub calls: RefCell<Vec<(ChainId, String, ExplorerLinkKind)>>,
    pub fail: bool,
}

impl ExplorerLinkPort for RecordingExplorer {
    fn build_link(
        &self,
        chain_id: ChainId,
        data: &str,
        kind: ExplorerLinkKind,
    ) -> Result<String, PortError> {
        self.calls
            .borrow_mut()
            .push((chain_id, data.to_owned(), kind));
        if self.fail {
            return Err(PortError::UnsupportedChain(chain_id));
        }
        Ok(format!("https://explorer.test/{chain_id}/{}/{data}", kind.as_str()))
    }
}

#[derive(Debug, Default)]
pub struct FakeWatchAsset {
    pub added: Cell<bool>,
    pub failure: RefCell<Option<String>>,
}

impl WatchAssetPort for FakeWatchAsset {
    fn add_token(&self, _token: &Token) -> Result<(), PortError> {
        self.added.set(true);
        Ok(())
    }

    fn success(&self, _token: &Token) -> bool {
        self.added.get()
    }

    fn failure(&self, _token: &Token) -> Option<String> {
        self.failure.borrow().clone()
    }
}

pub type TestModal = ConfirmationModal<RecordingExplorer, FakeWatchAsset>;

pub fn new_modal() -> TestModal {
    ConfirmationModal::new(RecordingExplorer::default(), FakeWatchAsset::default())
}

pub fn sushi_token() -> Currency {
    Currency::Token(Token {
        chain_id: 1,
        address: "0x6B3595068778DD592e39A122f4f5a5cF09C90fE2"
            .parse::<Address>()
            .expect("valid token address"),
        symbol: "SUSHI".to_owned(),
        decimals: 18,
        logo_uri: None,
    })
}
