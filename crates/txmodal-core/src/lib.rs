pub mod controller;
pub mod dismiss;
pub mod domain;
pub mod ports;
pub mod state_machine;
pub mod view;
pub mod views;

pub use controller::{ConfirmationModal, ModalContent, ModalFrame, ModalProps};
pub use dismiss::DismissHandle;
pub use domain::{
    truncate_hash, ActiveSession, Currency, DisplayState, PendingContext, SubmittedContext,
    Token, DEFAULT_PENDING_TEXT,
};
pub use ports::{ExplorerLinkKind, ExplorerLinkPort, PortError, WatchAssetPort};
pub use state_machine::{classify, DisplayTracker, StateTransition};
pub use view::{Animation, StatusIcon, TextEmphasis, ViewAction, ViewNode};
pub use views::{error_view, pending_view, submitted_view, ContentView};
