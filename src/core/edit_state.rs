//! Create/edit mode of the form.

/// `Idle`: the next submit creates a record.
/// `Editing(id)`: the next submit overwrites length and buffer type of `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(i64),
}

impl EditState {
    pub fn target(&self) -> Option<i64> {
        match self {
            EditState::Idle => None,
            EditState::Editing(id) => Some(*id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing(_))
    }

    /// Record selected for editing (also switches from one record to another).
    pub fn begin(&mut self, id: i64) {
        *self = EditState::Editing(id);
    }

    /// Explicit cancel, successful update, or dismiss.
    pub fn reset(&mut self) {
        *self = EditState::Idle;
    }

    /// A record was deleted; leave edit mode only if it was the target.
    /// Returns true when the state changed.
    pub fn on_deleted(&mut self, id: i64) -> bool {
        if self.target() == Some(id) {
            self.reset();
            true
        } else {
            false
        }
    }

    /// Label of the submit action in the current mode.
    pub fn submit_label(&self) -> &'static str {
        match self {
            EditState::Idle => "Add",
            EditState::Editing(_) => "Update",
        }
    }
}
