use crate::domain::DisplayState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTransition {
    pub from: DisplayState,
    pub to: DisplayState,
    pub reason: &'static str,
}

/// Label a change between two derived states.
///
/// The display is recomputed from inputs each render, so every change is
/// accepted; changes outside the normal lifecycle are labelled `external reset`.
pub fn classify(from: DisplayState, to: DisplayState) -> Option<StateTransition> {
    if from == to {
        return None;
    }
    let reason = match (from, to) {
        (DisplayState::Idle, DisplayState::Pending) => "attempt started",
        (DisplayState::Pending, DisplayState::Submitted) => "transaction submitted",
        (DisplayState::Pending, DisplayState::Idle) => "attempt abandoned",
        (DisplayState::Pending, DisplayState::Error) => "attempt failed",
        (DisplayState::Error, DisplayState::Pending) => "attempt restarted",
        (DisplayState::Error, DisplayState::Idle) => "error cleared",
        (DisplayState::Submitted, DisplayState::Idle) => "dialog reset",
        _ => "external reset",
    };
    Some(StateTransition { from, to, reason })
}

/// Observes successive renders of an open dialog and records state changes.
///
/// Dismissal freezes the tracker until `reopen`.
#[derive(Debug, Clone)]
pub struct DisplayTracker {
    current: DisplayState,
    open: bool,
    history: Vec<StateTransition>,
}

impl Default for DisplayTracker {
    fn default() -> Self {
        Self {
            current: DisplayState::Idle,
            open: true,
            history: Vec::new(),
        }
    }
}

impl DisplayTracker {
    pub fn current(&self) -> DisplayState {
        self.current
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    pub fn observe(&mut self, next: DisplayState) -> Option<&StateTransition> {
        if !self.open {
            return None;
        }
        let transition = classify(self.current, next)?;
        tracing::debug!(
            from = transition.from.label(),
            to = transition.to.label(),
            reason = transition.reason,
            "confirmation dialog transition"
        );
        self.current = next;
        self.history.push(transition);
        self.history.last()
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn reopen(&mut self, state: DisplayState) {
        self.open = true;
        self.current = state;
    }
}
