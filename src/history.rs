use crate::element::Element;
use crate::error::EditorError;
use crate::util::time;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of a recorded change, shown in the history panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Create,
    Edit,
    Delete,
    Save,
    Restore,
}

impl ActionKind {
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Create => "Create",
            ActionKind::Edit => "Edit",
            ActionKind::Delete => "Delete",
            ActionKind::Save => "Save",
            ActionKind::Restore => "Restore",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ActionKind::Create => "➕",
            ActionKind::Edit => "✏",
            ActionKind::Delete => "🗑",
            ActionKind::Save => "💾",
            ActionKind::Restore => "⟲",
        }
    }
}

/// One undoable unit of change: metadata plus a full deep copy of the
/// element collection at the moment it was recorded
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub ordinal: u64,
    /// Seconds since the UNIX epoch
    pub timestamp: f64,
    pub kind: ActionKind,
    pub description: String,
    snapshot: Vec<Element>,
}

impl HistoryEntry {
    pub fn snapshot(&self) -> &[Element] {
        &self.snapshot
    }
}

/// Linear snapshot history: an ordered log plus a cursor at the entry
/// representing current state.
///
/// Recording while the cursor sits before the tail discards the redo tail
/// first (standard linear-undo semantics). The cursor is `None` only while
/// the log is empty.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
    next_ordinal: u64,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    /// Append an entry for `snapshot`, discarding any redo tail, and move
    /// the cursor to it
    pub fn record(
        &mut self,
        kind: ActionKind,
        description: impl Into<String>,
        snapshot: Vec<Element>,
    ) -> &HistoryEntry {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);
        self.next_ordinal += 1;
        self.entries.push(HistoryEntry {
            id: Uuid::new_v4(),
            ordinal: self.next_ordinal,
            timestamp: time::epoch_secs(),
            kind,
            description: description.into(),
            snapshot,
        });
        self.cursor = Some(self.entries.len() - 1);
        self.entries.last().unwrap()
    }

    /// Step the cursor back and return the snapshot to restore. No-op
    /// (returns `None`) when already at the oldest entry or the log is empty.
    pub fn undo(&mut self) -> Option<Vec<Element>> {
        let cursor = self.cursor?;
        if cursor == 0 {
            return None;
        }
        self.cursor = Some(cursor - 1);
        Some(self.entries[cursor - 1].snapshot.clone())
    }

    /// Step the cursor forward and return the snapshot to restore. No-op
    /// when already at the newest entry.
    pub fn redo(&mut self) -> Option<Vec<Element>> {
        let cursor = self.cursor?;
        if cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor = Some(cursor + 1);
        Some(self.entries[cursor + 1].snapshot.clone())
    }

    /// Jump the cursor to the entry with `id` and return its snapshot.
    /// Records nothing; a later `record` truncates everything after the
    /// jumped-to entry as usual.
    pub fn restore_to(&mut self, id: Uuid) -> Result<Vec<Element>, EditorError> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(EditorError::UnknownHistoryEntry(id))?;
        self.cursor = Some(position);
        Ok(self.entries[position].snapshot.clone())
    }

    /// Roll the cursor back after a refused restore
    pub(crate) fn set_cursor(&mut self, cursor: Option<usize>) {
        debug_assert!(cursor.is_none_or(|c| c < self.entries.len()));
        self.cursor = cursor;
    }

    /// Empty the log. Does not touch the live document.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(n: usize) -> Vec<Element> {
        // Distinguishable snapshots without building real elements
        let mut doc = crate::Document::new();
        for _ in 0..n {
            doc.add_element(crate::ElementKind::Text, crate::editor::DEFAULT_CANVAS_SIZE);
        }
        doc.snapshot()
    }

    #[test]
    fn cursor_tracks_last_record() {
        let mut history = History::new();
        assert_eq!(history.cursor(), None);
        history.record(ActionKind::Create, "a", snap(1));
        history.record(ActionKind::Edit, "b", snap(2));
        assert_eq!(history.cursor(), Some(1));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_at_first_entry_is_noop() {
        let mut history = History::new();
        assert!(history.undo().is_none());
        history.record(ActionKind::Create, "a", snap(1));
        assert!(history.undo().is_none());
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    fn restore_to_unknown_entry_is_refused() {
        let mut history = History::new();
        history.record(ActionKind::Create, "a", snap(1));
        assert!(history.restore_to(Uuid::new_v4()).is_err());
        assert_eq!(history.cursor(), Some(0));
    }
}
