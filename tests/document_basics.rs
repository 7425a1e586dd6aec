use pagecraft::document::{DUPLICATE_OFFSET, Document, ElementPatch};
use pagecraft::element::ElementKind;
use egui::{Vec2, pos2, vec2};

const CANVAS: Vec2 = vec2(960.0, 600.0);

#[test]
fn ids_stay_unique_across_adds_and_duplicates() {
    let mut doc = Document::new();
    let a = doc.add_element(ElementKind::Text, CANVAS);
    let b = doc.add_element(ElementKind::Button, CANVAS);
    let c = doc.duplicate_element(a).unwrap();
    let d = doc.duplicate_element(c).unwrap();

    let ids = [a, b, c, d];
    for (i, left) in ids.iter().enumerate() {
        for right in &ids[i + 1..] {
            assert_ne!(left, right);
        }
    }
    // Deleting never frees an id for reuse
    doc.delete_element(d);
    let e = doc.add_element(ElementKind::Card, CANVAS);
    assert!(!ids.contains(&e));
}

#[test]
fn default_content_depends_on_kind() {
    let mut doc = Document::new();
    let text = doc.add_element(ElementKind::Text, CANVAS);
    let button = doc.add_element(ElementKind::Button, CANVAS);
    let image = doc.add_element(ElementKind::Image, CANVAS);

    assert_eq!(doc.find(text).unwrap().content, "New Text");
    assert_eq!(doc.find(button).unwrap().content, "Click Me");
    assert_eq!(doc.find(image).unwrap().content, "");
}

#[test]
fn spawn_positions_do_not_collide_exactly() {
    let mut doc = Document::new();
    for _ in 0..10 {
        doc.add_element(ElementKind::Text, CANVAS);
    }
    let mut positions: Vec<_> = doc.elements().iter().map(|el| el.position).collect();
    let before = positions.len();
    positions.dedup();
    assert_eq!(positions.len(), before);
}

#[test]
fn spawn_cascade_wraps_inside_the_canvas() {
    let mut doc = Document::new();
    for _ in 0..30 {
        doc.add_element(ElementKind::Text, CANVAS);
    }
    for el in doc.elements() {
        let rect = el.rect();
        assert!(rect.min.x >= 0.0 && rect.min.y >= 0.0, "{} spawned off-canvas", el.id);
        assert!(
            rect.max.x <= CANVAS.x && rect.max.y <= CANVAS.y,
            "{} spawned off-canvas at {:?}",
            el.id,
            el.position
        );
    }
}

#[test]
fn style_updates_merge_instead_of_replacing() {
    let mut doc = Document::new();
    let id = doc.add_element(ElementKind::Text, CANVAS);
    // Defaults: fontSize 16px, color #000000
    doc.update_element(id, ElementPatch::style("color", "#0000ff"));

    let style = &doc.find(id).unwrap().style;
    assert_eq!(style.get("color"), Some("#0000ff"));
    assert_eq!(style.get("fontSize"), Some("16px"));
}

#[test]
fn update_on_unknown_id_is_a_silent_noop() {
    let mut doc = Document::new();
    doc.add_element(ElementKind::Text, CANVAS);
    let ghost = doc.add_element(ElementKind::Button, CANVAS);
    doc.delete_element(ghost);

    let before = doc.snapshot();
    let changed = doc.update_element(ghost, ElementPatch::content("boo"));
    assert!(!changed);
    assert_eq!(doc.snapshot(), before);
}

#[test]
fn delete_on_unknown_id_is_a_silent_noop() {
    let mut doc = Document::new();
    let id = doc.add_element(ElementKind::Text, CANVAS);
    assert!(doc.delete_element(id));
    assert!(!doc.delete_element(id));
    assert!(doc.is_empty());
}

#[test]
fn duplicate_offsets_and_appends_last() {
    let mut doc = Document::new();
    let original = doc.add_element(ElementKind::Card, CANVAS);
    doc.add_element(ElementKind::Text, CANVAS);
    doc.update_element(original, ElementPatch::position(pos2(100.0, 50.0)));

    let copy = doc.duplicate_element(original).unwrap();
    let copied = doc.find(copy).unwrap();
    assert_eq!(copied.position, pos2(100.0, 50.0) + DUPLICATE_OFFSET);
    assert_eq!(copied.kind, ElementKind::Card);
    assert_eq!(doc.elements().last().unwrap().id, copy);
}

#[test]
fn insertion_order_survives_non_structural_updates() {
    let mut doc = Document::new();
    let first = doc.add_element(ElementKind::Text, CANVAS);
    let second = doc.add_element(ElementKind::Button, CANVAS);
    let third = doc.add_element(ElementKind::Image, CANVAS);

    doc.update_element(second, ElementPatch::content("updated"));
    doc.update_element(first, ElementPatch::position(pos2(10.0, 10.0)));

    let order: Vec<_> = doc.elements().iter().map(|el| el.id).collect();
    assert_eq!(order, vec![first, second, third]);
}

#[test]
fn topmost_hit_honors_paint_order() {
    let mut doc = Document::new();
    let below = doc.add_element(ElementKind::Container, CANVAS);
    let above = doc.add_element(ElementKind::Container, CANVAS);
    doc.update_element(below, ElementPatch::position(pos2(0.0, 0.0)));
    doc.update_element(above, ElementPatch::position(pos2(0.0, 0.0)));

    assert_eq!(doc.topmost_at(pos2(10.0, 10.0)).unwrap().id, above);
    assert!(doc.topmost_at(pos2(5000.0, 5000.0)).is_none());
}
