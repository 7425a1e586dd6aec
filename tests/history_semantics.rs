use pagecraft::document::Document;
use pagecraft::element::ElementKind;
use pagecraft::history::{ActionKind, History};
use egui::{Vec2, vec2};

const CANVAS: Vec2 = vec2(960.0, 600.0);

fn snapshot_with(n: usize) -> Vec<pagecraft::Element> {
    let mut doc = Document::new();
    for _ in 0..n {
        doc.add_element(ElementKind::Text, CANVAS);
    }
    doc.snapshot()
}

#[test]
fn record_after_undo_discards_the_redo_tail() {
    let mut history = History::new();
    history.record(ActionKind::Create, "A", snapshot_with(1));
    history.record(ActionKind::Create, "B", snapshot_with(2));
    assert!(history.undo().is_some());
    history.record(ActionKind::Create, "C", snapshot_with(3));

    let descriptions: Vec<_> = history
        .entries()
        .iter()
        .map(|entry| entry.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["A", "C"]);
    assert_eq!(history.cursor(), Some(1));
    assert!(!history.can_redo());
}

#[test]
fn undo_and_redo_are_noops_at_the_boundaries() {
    let mut history = History::new();
    assert!(history.undo().is_none());
    assert!(history.redo().is_none());

    history.record(ActionKind::Create, "only", snapshot_with(1));
    // The oldest entry is the baseline; it cannot be undone past
    assert!(history.undo().is_none());
    assert!(history.redo().is_none());
    assert_eq!(history.cursor(), Some(0));
}

#[test]
fn undo_returns_the_previous_snapshot() {
    let mut history = History::new();
    history.record(ActionKind::Create, "one", snapshot_with(1));
    history.record(ActionKind::Create, "two", snapshot_with(2));

    let restored = history.undo().unwrap();
    assert_eq!(restored.len(), 1);
    let redone = history.redo().unwrap();
    assert_eq!(redone.len(), 2);
}

#[test]
fn restore_jumps_the_cursor_and_later_records_truncate() {
    let mut history = History::new();
    history.record(ActionKind::Create, "one", snapshot_with(1));
    history.record(ActionKind::Create, "two", snapshot_with(2));
    history.record(ActionKind::Create, "three", snapshot_with(3));

    let first_id = history.entries()[0].id;
    let restored = history.restore_to(first_id).unwrap();
    assert_eq!(restored.len(), 1);
    assert_eq!(history.cursor(), Some(0));
    // Restore itself records nothing
    assert_eq!(history.entries().len(), 3);

    history.record(ActionKind::Edit, "four", snapshot_with(4));
    let descriptions: Vec<_> = history
        .entries()
        .iter()
        .map(|entry| entry.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["one", "four"]);
}

#[test]
fn clear_empties_the_log_only() {
    let mut history = History::new();
    history.record(ActionKind::Save, "saved", snapshot_with(2));
    history.clear();
    assert!(history.is_empty());
    assert_eq!(history.cursor(), None);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn ordinals_and_timestamps_are_monotonic() {
    let mut history = History::new();
    history.record(ActionKind::Create, "a", snapshot_with(1));
    history.record(ActionKind::Edit, "b", snapshot_with(1));
    let entries = history.entries();
    assert!(entries[0].ordinal < entries[1].ordinal);
    assert!(entries[0].timestamp <= entries[1].timestamp);
    assert_ne!(entries[0].id, entries[1].id);
}
