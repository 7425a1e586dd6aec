use crate::element::{Element, ElementBlueprint, ElementId, ElementKind, StyleMap};
use crate::error::EditorError;
use egui::{Pos2, Vec2, pos2, vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Offset applied to a duplicated element so the copy is visibly distinct
pub const DUPLICATE_OFFSET: Vec2 = vec2(20.0, 20.0);

const SPAWN_ORIGIN: Pos2 = pos2(40.0, 40.0);
const SPAWN_STEP: Vec2 = vec2(24.0, 24.0);

/// Partial update for a single element. Unset fields are left untouched;
/// the style map merges key-wise into the element's existing styles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub content: Option<String>,
    pub position: Option<Pos2>,
    pub size: Option<Vec2>,
    /// Reset the element to intrinsic sizing (applied after `size`)
    pub auto_size: bool,
    pub style: StyleMap,
}

impl ElementPatch {
    pub fn content(value: impl Into<String>) -> Self {
        Self {
            content: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn position(pos: Pos2) -> Self {
        Self {
            position: Some(pos),
            ..Self::default()
        }
    }

    pub fn style(key: &str, value: &str) -> Self {
        let mut style = StyleMap::new();
        style.set(key, value);
        Self {
            style,
            ..Self::default()
        }
    }
}

/// The mutable element collection of one editor instance.
///
/// Collection order is insertion order and doubles as paint order (last
/// inserted paints on top). All mutation goes through the methods below;
/// mutations against unknown ids are silent no-ops.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    elements: Vec<Element>,
    next_id: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn find(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    fn find_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    /// Topmost element under `pos`, honoring paint order
    pub fn topmost_at(&self, pos: Pos2) -> Option<&Element> {
        self.elements.iter().rev().find(|el| el.hit_test(pos))
    }

    fn fresh_id(&mut self) -> ElementId {
        self.next_id += 1;
        ElementId::new(self.next_id)
    }

    /// Spawn position for a new element: cascades diagonally from a fixed
    /// origin, skipping spots an existing element occupies exactly. Each
    /// axis wraps back to the origin when the footprint would leave
    /// `bounds`, so a long run of adds never spawns off-canvas.
    fn spawn_position(&self, footprint: Vec2, bounds: Vec2) -> Pos2 {
        let limit = (bounds - footprint).max(Vec2::ZERO);
        let mut candidate = pos2(SPAWN_ORIGIN.x.min(limit.x), SPAWN_ORIGIN.y.min(limit.y));
        // The wrapped cascade can cycle; after one candidate per element
        // a collision is accepted rather than looping
        for _ in 0..=self.elements.len() {
            if !self.elements.iter().any(|el| el.position == candidate) {
                break;
            }
            candidate += SPAWN_STEP;
            if candidate.x > limit.x {
                candidate.x = SPAWN_ORIGIN.x.min(limit.x);
            }
            if candidate.y > limit.y {
                candidate.y = SPAWN_ORIGIN.y.min(limit.y);
            }
        }
        candidate
    }

    /// Add a new element of `kind` with kind defaults, appended last. The
    /// spawn position stays inside `bounds` (the canvas size).
    pub fn add_element(&mut self, kind: ElementKind, bounds: Vec2) -> ElementId {
        let id = self.fresh_id();
        let element = Element {
            id,
            kind,
            content: kind.default_content().to_owned(),
            position: self.spawn_position(kind.intrinsic_size(), bounds),
            size: None,
            style: kind.default_style(),
        };
        log::debug!("add {} {}", kind.label(), id);
        self.elements.push(element);
        id
    }

    /// Merge `patch` into the element with `id`. Returns false (and does
    /// nothing) if the id is unknown. Positions are written as given; any
    /// clamping is the caller's concern.
    pub fn update_element(&mut self, id: ElementId, patch: ElementPatch) -> bool {
        let Some(element) = self.find_mut(id) else {
            return false;
        };
        if let Some(content) = patch.content {
            element.content = content;
        }
        if let Some(position) = patch.position {
            element.position = position;
        }
        if let Some(size) = patch.size {
            element.size = Some(size);
        }
        if patch.auto_size {
            element.size = None;
        }
        element.style.merge(&patch.style);
        true
    }

    /// Remove the element with `id`. Returns false if the id is unknown.
    pub fn delete_element(&mut self, id: ElementId) -> bool {
        let before = self.elements.len();
        self.elements.retain(|el| el.id != id);
        self.elements.len() != before
    }

    /// Clone the element with `id` under a fresh id, offset so the copy is
    /// visibly distinguishable, appended last
    pub fn duplicate_element(&mut self, id: ElementId) -> Option<ElementId> {
        let source = self.find(id)?.clone();
        let new_id = self.fresh_id();
        let mut copy = source;
        copy.id = new_id;
        copy.position += DUPLICATE_OFFSET;
        self.elements.push(copy);
        Some(new_id)
    }

    /// Atomically replace the whole collection from a preset, assigning
    /// fresh ids to every blueprint
    pub fn load_blueprints(&mut self, blueprints: Vec<ElementBlueprint>) {
        let mut elements = Vec::with_capacity(blueprints.len());
        for bp in blueprints {
            self.next_id += 1;
            elements.push(Element {
                id: ElementId::new(self.next_id),
                kind: bp.kind,
                content: bp.content,
                position: bp.position,
                size: bp.size,
                style: bp.style,
            });
        }
        self.elements = elements;
    }

    /// Atomically replace the whole collection with a snapshot, preserving
    /// ids. Refuses snapshots carrying duplicate ids and leaves the live
    /// collection unchanged in that case. The id counter is re-seeded past
    /// the restored ids so they are never handed out again.
    pub fn replace(&mut self, snapshot: Vec<Element>) -> Result<(), EditorError> {
        let mut seen = HashSet::new();
        for element in &snapshot {
            if !seen.insert(element.id) {
                return Err(EditorError::CorruptSnapshot(element.id.raw()));
            }
        }
        let max_id = snapshot.iter().map(|el| el.id.raw()).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id);
        self.elements = snapshot;
        Ok(())
    }

    /// Deep copy of the current collection, the unit history snapshots on
    pub fn snapshot(&self) -> Vec<Element> {
        self.elements.clone()
    }
}
