use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::keymap;

/// The single in-flight inline edit: which cell, and the pending value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditCell<R, C> {
    pub row: R,
    pub column: C,
    pub value: String,
}

/// Returned by [`EditSession::save_edit`]; the host persists `value` however
/// it likes. The controller itself never persists anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitRequest<R, C> {
    pub row: R,
    pub column: C,
    pub value: String,
}

/// Manages at most one inline cell edit at a time.
///
/// Two states: idle and editing. Every operation is total; none of them can
/// fail, and operations that do not apply in the current state are no-ops.
#[derive(Clone, Debug)]
pub struct EditSession<R, C> {
    cell: Option<EditCell<R, C>>,
}

impl<R, C> Default for EditSession<R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, C> EditSession<R, C> {
    pub fn new() -> Self {
        Self { cell: None }
    }

    /// Begins editing `(row, column)` with `initial` as the pending value.
    ///
    /// Last write wins: any in-flight session is discarded unconditionally,
    /// with no confirmation and no commit. The discarded session is returned
    /// so hosts can observe the replacement.
    pub fn start_edit(&mut self, row: R, column: C, initial: impl Into<String>) -> Option<EditCell<R, C>> {
        self.cell.replace(EditCell {
            row,
            column,
            value: initial.into(),
        })
    }

    /// Updates the pending value in place. A no-op while idle; nothing is
    /// buffered, so an idle-state call cannot leak into the next
    /// [`EditSession::start_edit`].
    pub fn set_value(&mut self, value: impl Into<String>) {
        if let Some(cell) = &mut self.cell {
            cell.value = value.into();
        }
    }

    /// Ends the session and requests a commit of the pending value.
    ///
    /// Returns exactly one [`CommitRequest`] if editing, `None` if idle. The
    /// session is idle afterwards either way.
    pub fn save_edit(&mut self) -> Option<CommitRequest<R, C>> {
        self.cell.take().map(|cell| CommitRequest {
            row: cell.row,
            column: cell.column,
            value: cell.value,
        })
    }

    /// Ends the session without committing, returning whatever it discarded.
    pub fn cancel_edit(&mut self) -> Option<EditCell<R, C>> {
        self.cell.take()
    }

    pub fn editing(&self) -> Option<&EditCell<R, C>> {
        self.cell.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.cell.is_some()
    }

    /// The pending value, if a session is active.
    pub fn value(&self) -> Option<&str> {
        self.cell.as_ref().map(|cell| cell.value.as_str())
    }
}

/// Key bindings hosts route to while an editor is open.
///
/// Defaults: `Enter` saves, `Esc` cancels. The session itself takes no key
/// events; the host checks these and calls [`EditSession::save_edit`] or
/// [`EditSession::cancel_edit`].
#[derive(Clone, Debug)]
pub struct EditBindings {
    pub save: Vec<KeyEvent>,
    pub cancel: Vec<KeyEvent>,
}

impl Default for EditBindings {
    fn default() -> Self {
        Self {
            save: vec![KeyEvent::new(KeyCode::Enter)],
            cancel: vec![KeyEvent::new(KeyCode::Esc)],
        }
    }
}

impl EditBindings {
    pub fn is_save(&self, key: &KeyEvent) -> bool {
        self.save.iter().any(|p| keymap::key_event_matches(p, key))
    }

    pub fn is_cancel(&self, key: &KeyEvent) -> bool {
        self.cancel.iter().any(|p| keymap::key_event_matches(p, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_then_save_commits_initial_value() {
        let mut session: EditSession<u64, &str> = EditSession::new();
        session.start_edit(5, "name", "Alice");
        let commit = session.save_edit();
        assert_eq!(
            commit,
            Some(CommitRequest {
                row: 5,
                column: "name",
                value: "Alice".to_string()
            })
        );
        assert!(!session.is_editing());
        assert_eq!(session.editing(), None);
    }

    #[test]
    fn set_value_updates_pending_value() {
        let mut session: EditSession<u64, &str> = EditSession::new();
        session.start_edit(5, "name", "Alice");
        session.set_value("Bob");
        assert_eq!(session.value(), Some("Bob"));
        let commit = session.save_edit().unwrap();
        assert_eq!(commit.value, "Bob");
        assert!(session.editing().is_none());
    }

    #[test]
    fn cancel_never_commits_and_subsequent_save_is_noop() {
        let mut session: EditSession<u64, &str> = EditSession::new();
        session.start_edit(1, "age", "30");
        session.set_value("31");
        let discarded = session.cancel_edit();
        assert_eq!(discarded.map(|c| c.value), Some("31".to_string()));
        assert_eq!(session.save_edit(), None);
    }

    #[test]
    fn save_while_idle_is_noop() {
        let mut session: EditSession<u64, String> = EditSession::new();
        assert_eq!(session.save_edit(), None);
        assert_eq!(session.cancel_edit(), None);
    }

    #[test]
    fn set_value_while_idle_does_not_leak_into_next_session() {
        let mut session: EditSession<u64, &str> = EditSession::new();
        session.set_value("ghost");
        assert_eq!(session.value(), None);
        session.start_edit(2, "name", "Carol");
        assert_eq!(session.value(), Some("Carol"));
    }

    #[test]
    fn start_edit_replaces_in_flight_session() {
        let mut session: EditSession<u64, &str> = EditSession::new();
        session.start_edit(1, "name", "Alice");
        session.set_value("Alfred");
        let discarded = session.start_edit(2, "city", "Ghent");
        assert_eq!(
            discarded,
            Some(EditCell {
                row: 1,
                column: "name",
                value: "Alfred".to_string()
            })
        );
        // The replacement session commits its own value, not the ghost's.
        let commit = session.save_edit().unwrap();
        assert_eq!((commit.row, commit.column, commit.value.as_str()), (2, "city", "Ghent"));
    }

    #[test]
    fn default_bindings_save_on_enter_cancel_on_esc() {
        let b = EditBindings::default();
        assert!(b.is_save(&KeyEvent::new(KeyCode::Enter)));
        assert!(b.is_cancel(&KeyEvent::new(KeyCode::Esc)));
        assert!(!b.is_save(&KeyEvent::new(KeyCode::Esc)));
        assert!(!b.is_cancel(&keymap::key_char('q')));
    }
}
