mod interaction;

pub use interaction::{DRAG_THRESHOLD, Interaction};

use crate::document::{Document, ElementPatch};
use crate::element::{Element, ElementBlueprint, ElementId, ElementKind};
use crate::error::EditorError;
use crate::history::{ActionKind, History};
use egui::{Pos2, Vec2, vec2};
use uuid::Uuid;

/// Canvas footprint used until the UI reports its real size
pub const DEFAULT_CANVAS_SIZE: Vec2 = vec2(960.0, 600.0);

/// One editor instance: the element collection, its snapshot history and
/// the selection/drag state machine, plus the canvas bounds drags clamp to.
///
/// Every user-intent mutation funnels through here so history granularity
/// stays one entry per discrete action: drags update the document on every
/// pointer move but commit a single entry at pointer-up, and property-panel
/// edits coalesce until the widget interaction completes.
pub struct EditorView {
    document: Document,
    history: History,
    interaction: Interaction,
    canvas_size: Vec2,
    /// Set by live panel edits, consumed by [`Self::commit_pending_edit`]
    edit_pending: bool,
    /// One-shot request for the inline editor widget to grab focus
    inline_focus_pending: bool,
}

impl Default for EditorView {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorView {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            history: History::new(),
            interaction: Interaction::Idle,
            canvas_size: DEFAULT_CANVAS_SIZE,
            edit_pending: false,
            inline_focus_pending: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    /// Keep the clamping bounds in sync with the canvas widget
    pub fn set_canvas_size(&mut self, size: Vec2) {
        self.canvas_size = size;
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.interaction.selected_id()
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected_id().and_then(|id| self.document.find(id))
    }

    fn record(&mut self, kind: ActionKind, description: impl Into<String>) {
        self.history.record(kind, description, self.document.snapshot());
    }

    // ---- user-intent entry points -------------------------------------

    /// Add a fresh element of `kind`, select it, one `Create` entry
    pub fn request_add_element(&mut self, kind: ElementKind) -> ElementId {
        let id = self.document.add_element(kind, self.canvas_size);
        self.interaction = Interaction::Selected { id };
        log::info!("added {} as {id}", kind.label());
        self.record(ActionKind::Create, format!("Added {}", kind.label()));
        id
    }

    /// Remove an element; clears selection when it was the selected one.
    /// Unknown ids are ignored.
    pub fn delete_element(&mut self, id: ElementId) {
        let label = self.document.find(id).map(|el| el.kind.label());
        if !self.document.delete_element(id) {
            return;
        }
        if self.interaction.selected_id() == Some(id) {
            self.interaction = Interaction::Idle;
        }
        log::info!("deleted {id}");
        self.record(
            ActionKind::Delete,
            format!("Deleted {}", label.unwrap_or("element")),
        );
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.delete_element(id);
        }
    }

    /// Clone an element with a visible offset; the copy becomes the
    /// selection. Unknown ids are ignored.
    pub fn duplicate_element(&mut self, id: ElementId) -> Option<ElementId> {
        let new_id = self.document.duplicate_element(id)?;
        self.interaction = Interaction::Selected { id: new_id };
        let label = self
            .document
            .find(new_id)
            .map_or("element", |el| el.kind.label());
        log::info!("duplicated {id} as {new_id}");
        self.record(ActionKind::Create, format!("Duplicated {label}"));
        Some(new_id)
    }

    pub fn duplicate_selected(&mut self) -> Option<ElementId> {
        let id = self.selected_id()?;
        self.duplicate_element(id)
    }

    /// Live partial update from the property panel. Writes straight into
    /// the document (positions deliberately unclamped: a typed value is
    /// declared intent) and arms the coalesced edit entry.
    pub fn apply_patch(&mut self, id: ElementId, patch: ElementPatch) {
        if self.document.update_element(id, patch) {
            self.edit_pending = true;
        }
    }

    /// Record the single `Edit` entry for a completed run of panel edits.
    /// No-op when nothing changed since the last commit.
    pub fn commit_pending_edit(&mut self, description: impl Into<String>) {
        if self.edit_pending {
            self.edit_pending = false;
            self.record(ActionKind::Edit, description);
        }
    }

    /// Replace the whole collection from a preset, as one `Create` entry
    pub fn load_template(&mut self, name: &str, blueprints: Vec<ElementBlueprint>) {
        self.document.load_blueprints(blueprints);
        self.interaction = Interaction::Idle;
        log::info!("loaded preset '{name}' ({} elements)", self.document.len());
        self.record(ActionKind::Create, format!("Loaded preset: {name}"));
    }

    /// Explicit save marker in the history
    pub fn save_snapshot(&mut self) {
        self.record(ActionKind::Save, "Saved design");
    }

    // ---- selection ------------------------------------------------------

    /// Explicitly select an element (pure read of the model). Unknown ids
    /// are ignored.
    pub fn select(&mut self, id: ElementId) {
        if self.document.find(id).is_some() {
            self.interaction = Interaction::Selected { id };
        }
    }

    pub fn deselect(&mut self) {
        self.interaction = Interaction::Idle;
    }

    // ---- history navigation ----------------------------------------------

    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        if let Err(err) = self.document.replace(snapshot) {
            log::warn!("undo refused: {err}");
            self.history.redo();
            return false;
        }
        // A selection into the previous state would be stale
        self.interaction = Interaction::Idle;
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        if let Err(err) = self.document.replace(snapshot) {
            log::warn!("redo refused: {err}");
            self.history.undo();
            return false;
        }
        self.interaction = Interaction::Idle;
        true
    }

    /// Jump to an arbitrary history entry (from the history list UI)
    pub fn restore_entry(&mut self, entry_id: Uuid) -> Result<(), EditorError> {
        let previous = self.history.cursor();
        let snapshot = self.history.restore_to(entry_id)?;
        if let Err(err) = self.document.replace(snapshot) {
            self.history.set_cursor(previous);
            return Err(err);
        }
        self.interaction = Interaction::Idle;
        log::debug!("restored history entry {entry_id}");
        Ok(())
    }

    /// Empty the history log; the live document is untouched
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // ---- pointer state machine -------------------------------------------

    /// Pointer pressed at `pos` (canvas-local). Over an element this arms a
    /// drag and selects it; over empty canvas it clears the selection.
    pub fn pointer_down(&mut self, pos: Pos2) {
        if self.interaction.is_editing() {
            self.commit_inline_edit();
        }
        match self.document.topmost_at(pos) {
            Some(element) => {
                self.interaction = Interaction::DragArmed {
                    id: element.id,
                    press: pos,
                    grab_offset: pos - element.position,
                };
            }
            None => self.interaction = Interaction::Idle,
        }
    }

    /// Pointer moved to `pos` while down. Updates the live position every
    /// tick (clamped to the canvas) without touching history.
    pub fn pointer_moved(&mut self, pos: Pos2) {
        match self.interaction.clone() {
            Interaction::DragArmed {
                id,
                press,
                grab_offset,
            } => {
                if (pos - press).length() >= DRAG_THRESHOLD {
                    self.interaction = Interaction::Dragging {
                        id,
                        grab_offset,
                        last: pos,
                    };
                    self.move_dragged(id, grab_offset, pos);
                }
            }
            Interaction::Dragging {
                id, grab_offset, ..
            } => {
                self.interaction = Interaction::Dragging {
                    id,
                    grab_offset,
                    last: pos,
                };
                self.move_dragged(id, grab_offset, pos);
            }
            _ => {}
        }
    }

    /// Pointer released at `pos`. Commits a finished drag as exactly one
    /// history entry; an armed-but-unmoved press stays a plain selection.
    pub fn pointer_released(&mut self, pos: Pos2) {
        match self.interaction.clone() {
            Interaction::DragArmed { id, .. } => {
                self.interaction = Interaction::Selected { id };
            }
            Interaction::Dragging {
                id, grab_offset, ..
            } => {
                self.move_dragged(id, grab_offset, pos);
                self.finish_drag(id);
            }
            _ => {}
        }
    }

    /// The pointer vanished mid-gesture (released off-canvas or left the
    /// window). Behaves exactly like pointer-up at the last known position,
    /// so a drag can never stick.
    pub fn pointer_cancelled(&mut self) {
        match self.interaction.clone() {
            Interaction::DragArmed { id, .. } => {
                self.interaction = Interaction::Selected { id };
            }
            Interaction::Dragging {
                id,
                grab_offset,
                last,
            } => {
                self.move_dragged(id, grab_offset, last);
                self.finish_drag(id);
            }
            _ => {}
        }
    }

    /// Double-click at `pos`: opens the in-place editor for kinds that
    /// support it, otherwise just selects
    pub fn double_click(&mut self, pos: Pos2) {
        let Some(element) = self.document.topmost_at(pos) else {
            self.interaction = Interaction::Idle;
            return;
        };
        let (id, kind, content) = (element.id, element.kind, element.content.clone());
        if kind.supports_inline_edit() {
            self.interaction = Interaction::EditingInline { id, draft: content };
            self.inline_focus_pending = true;
        } else {
            self.interaction = Interaction::Selected { id };
        }
    }

    fn move_dragged(&mut self, id: ElementId, grab_offset: Vec2, pointer: Pos2) {
        let Some(footprint) = self.document.find(id).map(|el| el.footprint()) else {
            return;
        };
        let target = self.clamp_to_canvas(pointer - grab_offset, footprint);
        self.document.update_element(id, ElementPatch::position(target));
    }

    fn finish_drag(&mut self, id: ElementId) {
        let label = self.document.find(id).map_or("element", |el| el.kind.label());
        log::debug!("drag committed for {id}");
        self.record(ActionKind::Edit, format!("Moved {label}"));
        self.interaction = Interaction::Selected { id };
    }

    /// Clamp per axis so the element stays fully inside the canvas. When
    /// the element is larger than the canvas the origin pins to zero.
    fn clamp_to_canvas(&self, pos: Pos2, footprint: Vec2) -> Pos2 {
        Pos2 {
            x: pos.x.clamp(0.0, (self.canvas_size.x - footprint.x).max(0.0)),
            y: pos.y.clamp(0.0, (self.canvas_size.y - footprint.y).max(0.0)),
        }
    }

    // ---- inline editing ---------------------------------------------------

    /// Open the in-place editor for `id` (the canvas edit control does
    /// this without a double-click). Ignored for kinds without inline text.
    pub fn begin_inline_edit(&mut self, id: ElementId) {
        let Some(element) = self.document.find(id) else {
            return;
        };
        if element.kind.supports_inline_edit() {
            self.interaction = Interaction::EditingInline {
                id,
                draft: element.content.clone(),
            };
            self.inline_focus_pending = true;
        }
    }

    /// Active inline edit target and its draft buffer, for the text widget
    pub fn inline_edit_mut(&mut self) -> Option<(ElementId, &mut String)> {
        match &mut self.interaction {
            Interaction::EditingInline { id, draft } => Some((*id, draft)),
            _ => None,
        }
    }

    /// Whether the inline editor widget should grab focus this frame
    pub fn take_inline_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.inline_focus_pending)
    }

    /// Write the draft back verbatim (empty allowed) and record one `Edit`
    /// entry, unless the content did not change
    pub fn commit_inline_edit(&mut self) {
        if let Interaction::EditingInline { id, draft } = self.interaction.clone() {
            let changed = self
                .document
                .find(id)
                .is_some_and(|el| el.content != draft);
            if changed {
                let label = self.document.find(id).map_or("element", |el| el.kind.label());
                self.document.update_element(id, ElementPatch::content(draft));
                self.record(ActionKind::Edit, format!("Edited {label}"));
            }
            self.interaction = Interaction::Selected { id };
        }
    }

    /// Abandon the draft without writing it back
    pub fn cancel_inline_edit(&mut self) {
        if let Interaction::EditingInline { id, .. } = self.interaction {
            self.interaction = Interaction::Selected { id };
        }
    }
}
