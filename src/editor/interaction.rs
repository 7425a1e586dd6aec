use crate::element::ElementId;
use egui::{Pos2, Vec2};

/// Distance the pointer must travel from its press position before an
/// armed drag becomes a real drag (keeps plain clicks from moving things)
pub const DRAG_THRESHOLD: f32 = 4.0;

/// The selection/drag/edit state machine of the canvas.
///
/// At most one element is selected at a time. Transitions:
/// - `Idle → DragArmed` on pointer-down over an element (selects it)
/// - `DragArmed → Dragging` once the pointer moves past [`DRAG_THRESHOLD`]
/// - `DragArmed → Selected` on pointer-up (a plain click)
/// - `Dragging → Selected` on pointer-up or cancellation (commit)
/// - `Selected → EditingInline` on double-click, for kinds that allow it
/// - `EditingInline → Selected` on commit (Enter/blur)
/// - any state `→ Idle` on pointer-down over empty canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// Nothing selected
    Idle,
    /// An element is selected and at rest
    Selected { id: ElementId },
    /// Pointer is down on an element but has not moved far enough to drag.
    /// `grab_offset` is pointer minus element position, captured once.
    DragArmed {
        id: ElementId,
        press: Pos2,
        grab_offset: Vec2,
    },
    /// Element follows the pointer; `last` is the most recent pointer
    /// position, kept so cancellation can commit where the drag left off
    Dragging {
        id: ElementId,
        grab_offset: Vec2,
        last: Pos2,
    },
    /// In-place text editing; `draft` is the editor buffer, written back
    /// verbatim on commit (empty is allowed)
    EditingInline { id: ElementId, draft: String },
}

impl Interaction {
    /// The element this state refers to, if any. Armed, dragging and
    /// editing states all imply selection.
    pub fn selected_id(&self) -> Option<ElementId> {
        match self {
            Interaction::Idle => None,
            Interaction::Selected { id }
            | Interaction::DragArmed { id, .. }
            | Interaction::Dragging { id, .. }
            | Interaction::EditingInline { id, .. } => Some(*id),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Interaction::Dragging { .. })
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Interaction::EditingInline { .. })
    }
}

impl Default for Interaction {
    fn default() -> Self {
        Interaction::Idle
    }
}
