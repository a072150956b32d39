use alloy::primitives::ChainId;

use crate::dismiss::DismissHandle;
use crate::domain::{ActiveSession, Currency, DisplayState, PendingContext, SubmittedContext};
use crate::ports::{ExplorerLinkPort, WatchAssetPort};
use crate::view::{ViewAction, ViewNode};
use crate::views::{error_view, pending_view, submitted_view, ContentView};

pub const DEFAULT_MAX_HEIGHT_PERCENT: f32 = 90.0;
pub const DEFAULT_HASH_DISPLAY_CHARS: usize = 6;

/// What the caller shows when neither attempting nor submitted.
#[derive(Debug)]
pub enum ModalContent {
    Idle(ContentView),
    Custom(ViewNode),
    /// Error screen built by the caller; the root selector never picks it on its own.
    Error { message: String },
}

impl ModalContent {
    pub fn error(message: impl Into<String>) -> Self {
        ModalContent::Error {
            message: message.into(),
        }
    }

    fn into_view(self) -> (DisplayState, ViewNode) {
        match self {
            ModalContent::Idle(view) => (DisplayState::Idle, view.render()),
            ModalContent::Custom(node) => (DisplayState::Idle, node),
            ModalContent::Error { message } => (DisplayState::Error, error_view(&message)),
        }
    }
}

/// Inputs for one render of the dialog.
#[derive(Debug, Clone)]
pub struct ModalProps<'a> {
    pub is_open: bool,
    pub on_dismiss: DismissHandle,
    pub hash: Option<&'a str>,
    pub attempting_txn: bool,
    pub pending: Option<&'a PendingContext>,
    pub currency_to_add: Option<&'a Currency>,
    pub session: ActiveSession,
}

impl<'a> ModalProps<'a> {
    pub fn new(is_open: bool, on_dismiss: DismissHandle) -> Self {
        Self {
            is_open,
            on_dismiss,
            hash: None,
            attempting_txn: false,
            pending: None,
            currency_to_add: None,
            session: ActiveSession::default(),
        }
    }

    pub fn attempting(mut self, attempting_txn: bool) -> Self {
        self.attempting_txn = attempting_txn;
        self
    }

    pub fn hash(mut self, hash: Option<&'a str>) -> Self {
        self.hash = hash;
        self
    }

    pub fn pending(mut self, pending: &'a PendingContext) -> Self {
        self.pending = Some(pending);
        self
    }

    pub fn currency_to_add(mut self, currency: Option<&'a Currency>) -> Self {
        self.currency_to_add = currency;
        self
    }

    pub fn session(mut self, session: ActiveSession) -> Self {
        self.session = session;
        self
    }

    pub fn chain_id(mut self, chain_id: Option<ChainId>) -> Self {
        self.session.chain_id = chain_id;
        self
    }
}

/// The overlay container plus the body chosen for this render.
#[derive(Debug, Clone)]
pub struct ModalFrame {
    pub is_open: bool,
    pub max_height_percent: f32,
    pub state: DisplayState,
    pub body: ViewNode,
    on_dismiss: DismissHandle,
}

impl ModalFrame {
    /// Dismiss is the only action the dialog handles itself; everything else is
    /// handed back to the host.
    pub fn dispatch(&self, action: ViewAction) -> Option<ViewAction> {
        match action {
            ViewAction::Dismiss => {
                self.on_dismiss.dismiss();
                None
            }
            other => Some(other),
        }
    }

    pub fn dismiss_handle(&self) -> &DismissHandle {
        &self.on_dismiss
    }
}

/// Root selector of the transaction confirmation dialog.
#[derive(Debug, Clone)]
pub struct ConfirmationModal<L, W>
where
    L: ExplorerLinkPort,
    W: WatchAssetPort,
{
    pub explorer: L,
    pub watch_asset: W,
    pub max_height_percent: f32,
    pub hash_display_chars: usize,
    pub fallback_pending: PendingContext,
}

impl<L, W> ConfirmationModal<L, W>
where
    L: ExplorerLinkPort,
    W: WatchAssetPort,
{
    pub fn new(explorer: L, watch_asset: W) -> Self {
        Self {
            explorer,
            watch_asset,
            max_height_percent: DEFAULT_MAX_HEIGHT_PERCENT,
            hash_display_chars: DEFAULT_HASH_DISPLAY_CHARS,
            fallback_pending: PendingContext::default(),
        }
    }

    /// Pick exactly one body. `content` is only invoked in the idle branch.
    pub fn render(
        &self,
        props: ModalProps<'_>,
        content: impl FnOnce() -> ModalContent,
    ) -> ModalFrame {
        let (state, body) = match DisplayState::derive(props.attempting_txn, props.hash) {
            DisplayState::Pending => {
                let ctx = props.pending.unwrap_or(&self.fallback_pending);
                (DisplayState::Pending, pending_view(ctx))
            }
            DisplayState::Submitted => {
                let ctx = SubmittedContext {
                    chain_id: props.session.chain_id,
                    transaction_hash: props.hash.map(str::to_owned),
                    currency_to_add: props.currency_to_add.cloned(),
                };
                let body = submitted_view(
                    &ctx,
                    &self.explorer,
                    &self.watch_asset,
                    self.hash_display_chars,
                );
                (DisplayState::Submitted, body)
            }
            DisplayState::Idle | DisplayState::Error => content().into_view(),
        };

        tracing::trace!(
            state = state.label(),
            is_open = props.is_open,
            "confirmation dialog rendered"
        );

        ModalFrame {
            is_open: props.is_open,
            max_height_percent: self.max_height_percent,
            state,
            body,
            on_dismiss: props.on_dismiss,
        }
    }
}
