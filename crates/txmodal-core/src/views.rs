//! The four dialog bodies.
//!
//! Views are pure: they describe what to draw. Every close affordance they emit
//! carries `ViewAction::Dismiss`, which the enclosing `ModalFrame` routes to the
//! caller's `DismissHandle`.

use std::fmt;

use crate::domain::{truncate_hash, PendingContext, SubmittedContext};
use crate::ports::{ExplorerLinkKind, ExplorerLinkPort, WatchAssetPort};
use crate::view::{Animation, StatusIcon, TextEmphasis, ViewAction, ViewNode};

pub const PENDING_TITLE: &str = "Waiting for Confirmation";
pub const PENDING_INSTRUCTION: &str = "Confirm this transaction in your wallet";
pub const SUBMITTED_TITLE: &str = "Transaction Submitted";
pub const EXPLORER_LABEL: &str = "View on explorer";
pub const ERROR_TITLE: &str = "Error";

pub fn pending_view(ctx: &PendingContext) -> ViewNode {
    ViewNode::Column(vec![
        ViewNode::Close,
        ViewNode::Animation(Animation::LoadingRollingCircle),
        ViewNode::text(PENDING_TITLE, TextEmphasis::Title),
        ViewNode::text(&ctx.primary_text, TextEmphasis::Strong),
        ViewNode::text(&ctx.secondary_text, TextEmphasis::Strong),
        ViewNode::text(PENDING_INSTRUCTION, TextEmphasis::Secondary),
    ])
}

/// Submitted confirmation with a guarded explorer link.
pub fn submitted_view<L, W>(
    ctx: &SubmittedContext,
    explorer: &L,
    watch_asset: &W,
    hash_display_chars: usize,
) -> ViewNode
where
    L: ExplorerLinkPort + ?Sized,
    W: WatchAssetPort + ?Sized,
{
    let mut nodes = vec![
        ViewNode::Close,
        ViewNode::Icon(StatusIcon::Submitted),
        ViewNode::text(SUBMITTED_TITLE, TextEmphasis::Title),
    ];

    let hash = ctx.transaction_hash.as_deref().filter(|h| !h.is_empty());

    match (ctx.chain_id, hash) {
        (Some(chain_id), Some(hash)) => {
            match explorer.build_link(chain_id, hash, ExplorerLinkKind::Transaction) {
                Ok(url) => nodes.push(ViewNode::Link {
                    label: EXPLORER_LABEL.to_owned(),
                    url,
                }),
                Err(e) => {
                    tracing::warn!(chain_id, error = %e, "explorer link unavailable, omitting");
                }
            }
        }
        (chain_id, hash) => {
            tracing::debug!(
                has_chain = chain_id.is_some(),
                has_hash = hash.is_some(),
                "missing link data, omitting explorer link"
            );
        }
    }

    if let Some(hash) = hash {
        nodes.push(ViewNode::Copyable {
            display: truncate_hash(hash, hash_display_chars),
            action: ViewAction::CopyHash(hash.to_owned()),
        });
    }

    if let Some(token) = ctx.currency_to_add.as_ref().and_then(|c| c.as_token()) {
        nodes.push(ViewNode::Spacer);
        if watch_asset.success(token) {
            nodes.push(ViewNode::Column(vec![
                ViewNode::Icon(StatusIcon::Success),
                ViewNode::text(format!("Added {}", token.symbol), TextEmphasis::Strong),
            ]));
        } else {
            nodes.push(ViewNode::button(
                format!("Add {} to your wallet", token.symbol),
                ViewAction::AddToken,
            ));
            if let Some(reason) = watch_asset.failure(token) {
                nodes.push(ViewNode::text(reason, TextEmphasis::Error));
            }
        }
    }

    nodes.push(ViewNode::Spacer);
    nodes.push(ViewNode::button("Close", ViewAction::Dismiss));
    ViewNode::Column(nodes)
}

pub fn error_view(message: &str) -> ViewNode {
    ViewNode::Column(vec![
        ViewNode::Header {
            title: ERROR_TITLE.to_owned(),
        },
        ViewNode::Icon(StatusIcon::Alert),
        ViewNode::text(message, TextEmphasis::Error),
        ViewNode::Spacer,
        ViewNode::button("Dismiss", ViewAction::Dismiss),
    ])
}

type Slot = Box<dyn Fn() -> ViewNode>;

/// Header plus two caller-owned slots. The slots run on every render so they
/// can read whatever caller state they close over.
pub struct ContentView {
    pub title: String,
    top: Slot,
    bottom: Slot,
}

impl ContentView {
    pub fn new(
        title: impl Into<String>,
        top: impl Fn() -> ViewNode + 'static,
        bottom: impl Fn() -> ViewNode + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            top: Box::new(top),
            bottom: Box::new(bottom),
        }
    }

    pub fn render(&self) -> ViewNode {
        ViewNode::Column(vec![
            ViewNode::Header {
                title: self.title.clone(),
            },
            (self.top)(),
            (self.bottom)(),
        ])
    }
}

impl fmt::Debug for ContentView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentView")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn pending_view_shows_fixed_and_caller_lines() {
        let node = pending_view(&PendingContext::new("Swapping 1 ETH", "for 3000 USDC"));
        assert_eq!(
            node.texts(),
            vec![
                PENDING_TITLE,
                "Swapping 1 ETH",
                "for 3000 USDC",
                PENDING_INSTRUCTION
            ]
        );
        assert!(node.find(|n| matches!(n, ViewNode::Animation(_))).is_some());
        assert!(node.can_dismiss());
    }

    #[test]
    fn error_view_renders_message_and_dismiss() {
        let node = error_view("User rejected the request");
        assert!(node.texts().contains(&"User rejected the request"));
        assert!(node
            .find(|n| matches!(n, ViewNode::Button { action: ViewAction::Dismiss, .. }))
            .is_some());
    }

    #[test]
    fn content_view_slots_run_every_render() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let view = ContentView::new(
            "Confirm Swap",
            move || {
                counter.set(counter.get() + 1);
                ViewNode::text(format!("render {}", counter.get()), TextEmphasis::Strong)
            },
            || ViewNode::button("Confirm", ViewAction::Dismiss),
        );

        let first = view.render();
        let second = view.render();
        assert_eq!(calls.get(), 2);
        assert!(first.texts().contains(&"render 1"));
        assert!(second.texts().contains(&"render 2"));
        assert_eq!(second.texts()[0], "Confirm Swap");
    }
}
