use crate::channel::{CHANGE_EDIT_MODE, Channel, Publisher};
use crate::mode::EditMode;

/// Read-only view of the holder's state handed down to child views.
pub struct Environment {
    pub edit_mode: EditMode,
    pub publisher: Publisher<EditMode>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Result of draining the change channel once.
pub struct PollOutcome {
    pub received: usize,
    pub ignored: usize,
    pub changed: bool,
}

/// Owns the edit mode for one view tree and applies change requests
/// published on its `change_edit_mode` channel.
pub struct EditModeHolder {
    edit_mode: EditMode,
    channel: Channel<EditMode>,
}

impl EditModeHolder {
    pub fn new() -> Self {
        Self {
            edit_mode: EditMode::default(),
            channel: Channel::new(CHANGE_EDIT_MODE),
        }
    }

    pub fn environment(&self) -> Environment {
        Environment {
            edit_mode: self.edit_mode,
            publisher: self.channel.publisher(),
        }
    }

    /// Returns false when `mode` equals the current value.
    pub fn apply(&mut self, mode: EditMode) -> bool {
        if mode == self.edit_mode {
            tracing::debug!(?mode, "edit mode unchanged");
            return false;
        }
        tracing::info!(from = ?self.edit_mode, to = ?mode, "edit mode changed");
        self.edit_mode = mode;
        true
    }

    /// Applies every pending request in order. `changed` compares the state
    /// before and after, so requests that cancel out report no change.
    pub fn poll(&mut self) -> PollOutcome {
        let before = self.edit_mode;
        let drained = self.channel.drain();
        let received = drained.values.len();
        for request in drained.values {
            let applied = self.apply(request.value);
            request.settle(applied);
        }
        PollOutcome {
            received,
            ignored: drained.ignored,
            changed: self.edit_mode != before,
        }
    }
}
