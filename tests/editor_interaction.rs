use pagecraft::document::ElementPatch;
use pagecraft::editor::EditorView;
use pagecraft::element::{ElementId, ElementKind};
use pagecraft::history::ActionKind;
use egui::{Pos2, pos2, vec2};

/// Editor with one text element parked at a known spot
fn editor_with_text_at(pos: Pos2) -> (EditorView, ElementId) {
    let mut editor = EditorView::new();
    editor.set_canvas_size(vec2(960.0, 600.0));
    let id = editor.request_add_element(ElementKind::Text);
    editor.apply_patch(id, ElementPatch::position(pos));
    editor.commit_pending_edit("Edited Text");
    (editor, id)
}

fn drag(editor: &mut EditorView, from: Pos2, via: &[Pos2], to: Pos2) {
    editor.pointer_down(from);
    for waypoint in via {
        editor.pointer_moved(*waypoint);
    }
    editor.pointer_moved(to);
    editor.pointer_released(to);
}

#[test]
fn a_drag_gesture_records_exactly_one_entry() {
    let (mut editor, id) = editor_with_text_at(pos2(40.0, 40.0));
    let entries_before = editor.history().entries().len();

    // Grab 10px into the element, wiggle through several positions
    drag(
        &mut editor,
        pos2(50.0, 50.0),
        &[pos2(80.0, 90.0), pos2(200.0, 120.0), pos2(321.0, 200.0)],
        pos2(510.0, 310.0),
    );

    assert_eq!(editor.history().entries().len(), entries_before + 1);
    let entry = editor.history().entries().last().unwrap();
    assert_eq!(entry.kind, ActionKind::Edit);

    // Final position only, pointer minus the grab offset
    let expected = pos2(500.0, 300.0);
    assert_eq!(editor.document().find(id).unwrap().position, expected);
    let snapshot_el = entry.snapshot().iter().find(|el| el.id == id).unwrap();
    assert_eq!(snapshot_el.position, expected);
}

#[test]
fn drag_positions_clamp_to_the_canvas() {
    let (mut editor, id) = editor_with_text_at(pos2(40.0, 40.0));

    drag(&mut editor, pos2(50.0, 50.0), &[], pos2(-400.0, -400.0));
    assert_eq!(editor.document().find(id).unwrap().position, pos2(0.0, 0.0));

    drag(&mut editor, pos2(10.0, 10.0), &[], pos2(5000.0, 5000.0));
    // Text footprint is 120x28, canvas 960x600
    assert_eq!(
        editor.document().find(id).unwrap().position,
        pos2(840.0, 572.0)
    );
}

#[test]
fn a_click_without_movement_selects_but_records_nothing() {
    let (mut editor, id) = editor_with_text_at(pos2(40.0, 40.0));
    editor.deselect();
    let entries_before = editor.history().entries().len();
    let position_before = editor.document().find(id).unwrap().position;

    editor.pointer_down(pos2(50.0, 50.0));
    // A 2px wobble stays below the drag threshold
    editor.pointer_moved(pos2(51.0, 51.0));
    editor.pointer_released(pos2(51.0, 51.0));

    assert_eq!(editor.selected_id(), Some(id));
    assert_eq!(editor.history().entries().len(), entries_before);
    assert_eq!(editor.document().find(id).unwrap().position, position_before);
}

#[test]
fn a_long_run_of_adds_stays_reachable_on_the_canvas() {
    let mut editor = EditorView::new();
    editor.set_canvas_size(vec2(960.0, 600.0));
    for _ in 0..30 {
        editor.request_add_element(ElementKind::Text);
    }
    for el in editor.document().elements() {
        let rect = el.rect();
        assert!(
            rect.max.x <= 960.0 && rect.max.y <= 600.0,
            "{} spawned outside the canvas at {:?}",
            el.id,
            el.position
        );
    }
}

#[test]
fn pointer_down_on_empty_canvas_deselects() {
    let (mut editor, id) = editor_with_text_at(pos2(40.0, 40.0));
    editor.select(id);
    editor.pointer_down(pos2(700.0, 500.0));
    assert_eq!(editor.selected_id(), None);
}

#[test]
fn cancellation_commits_like_pointer_up() {
    let (mut editor, id) = editor_with_text_at(pos2(40.0, 40.0));
    let entries_before = editor.history().entries().len();

    editor.pointer_down(pos2(50.0, 50.0));
    editor.pointer_moved(pos2(150.0, 150.0));
    // Pointer leaves the window mid-drag
    editor.pointer_cancelled();

    assert!(!editor.interaction().is_dragging());
    assert_eq!(editor.history().entries().len(), entries_before + 1);
    assert_eq!(
        editor.document().find(id).unwrap().position,
        pos2(140.0, 140.0)
    );
}

#[test]
fn deleting_the_selected_element_clears_selection() {
    let mut editor = EditorView::new();
    let x = editor.request_add_element(ElementKind::Text);
    let y = editor.request_add_element(ElementKind::Button);

    editor.select(x);
    editor.delete_element(y);
    assert_eq!(editor.selected_id(), Some(x), "unrelated delete kept selection");

    editor.delete_element(x);
    assert_eq!(editor.selected_id(), None);
    assert!(editor.document().find(x).is_none());
}

#[test]
fn duplicate_selects_the_copy() {
    let mut editor = EditorView::new();
    let id = editor.request_add_element(ElementKind::Card);
    let copy = editor.duplicate_element(id).unwrap();
    assert_eq!(editor.selected_id(), Some(copy));
    assert_ne!(copy, id);
}

#[test]
fn double_click_edits_only_inline_capable_kinds() {
    let (mut editor, _id) = editor_with_text_at(pos2(40.0, 40.0));
    editor.double_click(pos2(50.0, 50.0));
    assert!(editor.interaction().is_editing());
    editor.cancel_inline_edit();

    let mut other = EditorView::new();
    let image = other.request_add_element(ElementKind::Image);
    other.apply_patch(image, ElementPatch::position(pos2(40.0, 40.0)));
    other.commit_pending_edit("Edited Image");
    other.double_click(pos2(60.0, 60.0));
    assert!(!other.interaction().is_editing());
    assert_eq!(other.selected_id(), Some(image));
}

#[test]
fn inline_edit_commits_verbatim_even_when_empty() {
    let (mut editor, id) = editor_with_text_at(pos2(40.0, 40.0));
    editor.double_click(pos2(50.0, 50.0));
    let entries_before = editor.history().entries().len();

    let (_, draft) = editor.inline_edit_mut().unwrap();
    draft.clear();
    editor.commit_inline_edit();

    let element = editor.document().find(id).unwrap();
    assert_eq!(element.content, "");
    // Display falls back to the kind placeholder; stored state stays empty
    assert_eq!(element.display_content(), "Text");
    assert_eq!(editor.history().entries().len(), entries_before + 1);
    assert!(!editor.interaction().is_editing());
}

#[test]
fn cancelling_an_inline_edit_discards_the_draft() {
    let (mut editor, id) = editor_with_text_at(pos2(40.0, 40.0));
    editor.double_click(pos2(50.0, 50.0));
    let entries_before = editor.history().entries().len();

    let (_, draft) = editor.inline_edit_mut().unwrap();
    draft.push_str(" scrapped");
    editor.cancel_inline_edit();

    assert_eq!(editor.document().find(id).unwrap().content, "New Text");
    assert_eq!(editor.history().entries().len(), entries_before);
    assert!(!editor.interaction().is_editing());
    assert_eq!(editor.selected_id(), Some(id));
}

#[test]
fn panel_edits_are_unclamped_and_coalesce_to_one_entry() {
    let (mut editor, id) = editor_with_text_at(pos2(40.0, 40.0));
    let entries_before = editor.history().entries().len();

    // Simulated keystrokes: several live patches, one completed interaction
    editor.apply_patch(id, ElementPatch::position(pos2(4000.0, -25.0)));
    editor.apply_patch(id, ElementPatch::content("Hello"));
    editor.apply_patch(id, ElementPatch::style("fontSize", "22px"));
    editor.commit_pending_edit("Edited Text");
    // Nothing pending, nothing recorded
    editor.commit_pending_edit("Edited Text");

    let element = editor.document().find(id).unwrap();
    assert_eq!(element.position, pos2(4000.0, -25.0));
    assert_eq!(element.content, "Hello");
    assert_eq!(editor.history().entries().len(), entries_before + 1);
}

#[test]
fn undo_and_redo_clear_the_selection() {
    let mut editor = EditorView::new();
    let id = editor.request_add_element(ElementKind::Text);
    editor.request_add_element(ElementKind::Button);

    editor.select(id);
    assert!(editor.undo());
    assert_eq!(editor.selected_id(), None);
    assert_eq!(editor.document().len(), 1);

    editor.select(id);
    assert!(editor.redo());
    assert_eq!(editor.selected_id(), None);
    assert_eq!(editor.document().len(), 2);

    assert!(!editor.redo(), "redo at the tail is a no-op");
}

#[test]
fn restore_entry_jumps_then_new_edits_truncate() {
    let mut editor = EditorView::new();
    editor.request_add_element(ElementKind::Text);
    editor.request_add_element(ElementKind::Button);
    editor.request_add_element(ElementKind::Image);
    assert_eq!(editor.history().entries().len(), 3);

    let first = editor.history().entries()[0].id;
    editor.restore_entry(first).unwrap();
    assert_eq!(editor.document().len(), 1);
    assert_eq!(editor.history().entries().len(), 3);

    editor.request_add_element(ElementKind::Card);
    assert_eq!(editor.history().entries().len(), 2);
    assert_eq!(editor.document().len(), 2);
}

#[test]
fn restore_entry_with_unknown_id_is_refused() {
    let mut editor = EditorView::new();
    editor.request_add_element(ElementKind::Text);
    let before = editor.document().snapshot();

    let result = editor.restore_entry(uuid::Uuid::new_v4());
    assert!(result.is_err());
    assert_eq!(editor.document().snapshot(), before);
    assert_eq!(editor.history().cursor(), Some(0));
}

#[test]
fn clear_history_keeps_the_live_document() {
    let mut editor = EditorView::new();
    editor.request_add_element(ElementKind::Text);
    editor.request_add_element(ElementKind::Button);
    editor.clear_history();

    assert!(editor.history().is_empty());
    assert_eq!(editor.document().len(), 2);
    assert!(!editor.undo());
}
