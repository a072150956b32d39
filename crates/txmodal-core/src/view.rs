//! Renderer-independent description of what the dialog shows.
//!
//! Views build a `ViewNode` tree; the egui shell walks it and reports the
//! `ViewAction`s the user triggered.

use serde::{Deserialize, Serialize};

/// Opaque looping animation resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Animation {
    LoadingRollingCircle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusIcon {
    Submitted,
    Alert,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEmphasis {
    Title,
    Strong,
    Secondary,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewAction {
    Dismiss,
    AddToken,
    OpenLink(String),
    CopyHash(String),
    /// Caller-defined action raised from its own content.
    Custom(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewNode {
    Column(Vec<ViewNode>),
    /// Right-aligned close icon.
    Close,
    /// Title with a close icon on the same row.
    Header { title: String },
    Animation(Animation),
    Icon(StatusIcon),
    Text { text: String, emphasis: TextEmphasis },
    Link { label: String, url: String },
    Button { label: String, action: ViewAction },
    /// Value with a small copy button.
    Copyable { display: String, action: ViewAction },
    Spacer,
    /// Caller-built content the dialog does not interpret.
    Custom(String),
}

impl ViewNode {
    pub fn text(text: impl Into<String>, emphasis: TextEmphasis) -> Self {
        ViewNode::Text {
            text: text.into(),
            emphasis,
        }
    }

    pub fn button(label: impl Into<String>, action: ViewAction) -> Self {
        ViewNode::Button {
            label: label.into(),
            action,
        }
    }

    pub fn children(&self) -> &[ViewNode] {
        match self {
            ViewNode::Column(children) => children,
            _ => &[],
        }
    }

    /// Depth-first walk over this node and its descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a ViewNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    pub fn find(&self, pred: impl Fn(&ViewNode) -> bool) -> Option<&ViewNode> {
        let mut found = None;
        self.walk(&mut |node| {
            if found.is_none() && pred(node) {
                found = Some(node);
            }
        });
        found
    }

    /// All visible text, in render order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |node| match node {
            ViewNode::Header { title } => out.push(title.as_str()),
            ViewNode::Text { text, .. } => out.push(text.as_str()),
            ViewNode::Link { label, .. } => out.push(label.as_str()),
            ViewNode::Button { label, .. } => out.push(label.as_str()),
            ViewNode::Copyable { display, .. } => out.push(display.as_str()),
            _ => {}
        });
        out
    }

    pub fn links(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let ViewNode::Link { url, .. } = node {
                out.push(url.as_str());
            }
        });
        out
    }

    /// Whether any close icon, header or button in the tree dismisses.
    pub fn can_dismiss(&self) -> bool {
        self.find(|node| {
            matches!(
                node,
                ViewNode::Close
                    | ViewNode::Header { .. }
                    | ViewNode::Button {
                        action: ViewAction::Dismiss,
                        ..
                    }
            )
        })
        .is_some()
    }
}
