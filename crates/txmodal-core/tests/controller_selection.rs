mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use txmodal_core::{
    ContentView, DismissHandle, DisplayState, ExplorerLinkKind, ModalContent, ModalProps,
    PendingContext, TextEmphasis, ViewAction, ViewNode,
};

use common::{new_modal, sushi_token};

fn marker() -> ViewNode {
    ViewNode::Custom("swap-review-marker".to_owned())
}

#[test]
fn attempting_takes_priority_over_hash() {
    let modal = new_modal();
    for hash in [None, Some(""), Some("0xabc")] {
        let frame = modal.render(
            ModalProps::new(true, DismissHandle::detached())
                .attempting(true)
                .hash(hash)
                .chain_id(Some(1)),
            || panic!("content must not be invoked while attempting"),
        );
        assert_eq!(frame.state, DisplayState::Pending);
    }
}

#[test]
fn pending_defaults_to_loading_text() {
    let modal = new_modal();
    let frame = modal.render(
        ModalProps::new(true, DismissHandle::detached()).attempting(true),
        || ModalContent::Custom(marker()),
    );
    let texts = frame.body.texts();
    assert!(texts.contains(&"Loading, please wait"));
    assert!(texts.contains(&""));
    assert!(texts.contains(&"Waiting for Confirmation"));
}

#[test]
fn caller_pending_text_replaces_fallback() {
    let modal = new_modal();
    let pending = PendingContext::new("Swapping 1 ETH for 3,000 USDC", "Slippage 0.5%");
    let frame = modal.render(
        ModalProps::new(true, DismissHandle::detached())
            .attempting(true)
            .pending(&pending),
        || ModalContent::Custom(marker()),
    );
    let texts = frame.body.texts();
    assert!(texts.contains(&"Swapping 1 ETH for 3,000 USDC"));
    assert!(texts.contains(&"Slippage 0.5%"));
    assert!(!texts.contains(&"Loading, please wait"));
}

#[test]
fn hash_without_attempt_selects_submitted_with_link() {
    let modal = new_modal();
    let frame = modal.render(
        ModalProps::new(true, DismissHandle::detached())
            .hash(Some("0xabc"))
            .chain_id(Some(1)),
        || panic!("content must not be invoked once submitted"),
    );
    assert_eq!(frame.state, DisplayState::Submitted);
    assert_eq!(
        modal.explorer.calls.borrow().as_slice(),
        &[(1, "0xabc".to_owned(), ExplorerLinkKind::Transaction)]
    );
    assert_eq!(
        frame.body.links(),
        vec!["https://explorer.test/1/transaction/0xabc"]
    );
    assert!(frame.body.texts().contains(&"Transaction Submitted"));
}

#[test]
fn submitted_without_chain_omits_link_section() {
    let modal = new_modal();
    let frame = modal.render(
        ModalProps::new(true, DismissHandle::detached()).hash(Some("0xabc")),
        || ModalContent::Custom(marker()),
    );
    assert_eq!(frame.state, DisplayState::Submitted);
    assert!(frame.body.links().is_empty());
    assert!(modal.explorer.calls.borrow().is_empty());
    assert!(!frame.body.texts().contains(&"View on explorer"));
}

#[test]
fn idle_renders_content_verbatim() {
    let modal = new_modal();
    for hash in [None, Some("")] {
        let frame = modal.render(
            ModalProps::new(true, DismissHandle::detached()).hash(hash),
            || ModalContent::Custom(marker()),
        );
        assert_eq!(frame.state, DisplayState::Idle);
        assert_eq!(frame.body, marker());
    }
}

#[test]
fn content_is_invoked_once_per_idle_render() {
    let modal = new_modal();
    let calls = AtomicUsize::new(0);
    for _ in 0..3 {
        modal.render(ModalProps::new(true, DismissHandle::detached()), || {
            calls.fetch_add(1, Ordering::SeqCst);
            ModalContent::Custom(marker())
        });
    }
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn idle_content_view_has_header_and_slots() {
    let modal = new_modal();
    let frame = modal.render(ModalProps::new(true, DismissHandle::detached()), || {
        ModalContent::Idle(ContentView::new(
            "Confirm Swap",
            || ViewNode::text("1 ETH -> 3,000 USDC", TextEmphasis::Strong),
            || ViewNode::button("Confirm Swap", ViewAction::Custom("confirm_swap".to_owned())),
        ))
    });
    assert_eq!(frame.state, DisplayState::Idle);
    assert_eq!(
        frame.body.texts(),
        vec!["Confirm Swap", "1 ETH -> 3,000 USDC", "Confirm Swap"]
    );
}

#[test]
fn error_is_only_reachable_through_content() {
    let modal = new_modal();
    let frame = modal.render(ModalProps::new(true, DismissHandle::detached()), || {
        ModalContent::error("Transaction rejected.")
    });
    assert_eq!(frame.state, DisplayState::Error);
    assert!(frame.body.texts().contains(&"Transaction rejected."));

    let frame = modal.render(
        ModalProps::new(true, DismissHandle::detached()).hash(Some("0xabc")),
        || ModalContent::error("Transaction rejected."),
    );
    assert_eq!(frame.state, DisplayState::Submitted);
}

#[test]
fn dismiss_dispatch_is_idempotent() {
    let modal = new_modal();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let handle = DismissHandle::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let frame = modal.render(
        ModalProps::new(true, handle.clone()).attempting(true),
        || ModalContent::Custom(marker()),
    );

    assert!(frame.dispatch(ViewAction::Dismiss).is_none());
    assert!(frame.dispatch(ViewAction::Dismiss).is_none());
    handle.dismiss();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(frame.dismiss_handle().is_dismissed());
}

#[test]
fn non_dismiss_actions_are_returned_to_host() {
    let modal = new_modal();
    let token = sushi_token();
    let frame = modal.render(
        ModalProps::new(true, DismissHandle::detached())
            .hash(Some("0xabc"))
            .chain_id(Some(1))
            .currency_to_add(Some(&token)),
        || ModalContent::Custom(marker()),
    );
    assert_eq!(
        frame.dispatch(ViewAction::AddToken),
        Some(ViewAction::AddToken)
    );
    assert!(!frame.dismiss_handle().is_dismissed());
}

#[test]
fn closed_frame_still_reports_selection() {
    let modal = new_modal();
    let frame = modal.render(
        ModalProps::new(false, DismissHandle::detached()).attempting(true),
        || ModalContent::Custom(marker()),
    );
    assert!(!frame.is_open);
    assert_eq!(frame.state, DisplayState::Pending);
    assert_eq!(frame.max_height_percent, 90.0);
}
