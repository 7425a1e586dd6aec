use egui::{Context, Key, Pos2, Rect, Response};

/// Domain-level events the canvas routes into the editor, with pointer
/// positions already translated into canvas-local coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    PointerDown(Pos2),
    PointerMoved(Pos2),
    PointerUp(Pos2),
    /// The pointer vanished mid-gesture (left the window or was released
    /// where egui could not see it)
    PointerCancelled,
    DoubleClick(Pos2),
    DeleteSelection,
    DuplicateSelection,
    Undo,
    Redo,
    Deselect,
}

/// Converts the canvas widget's egui response plus frame input into
/// [`CanvasEvent`]s. Keyboard shortcuts are suppressed while any text
/// widget owns the keyboard, so typing never deletes elements.
pub struct CanvasInput {
    canvas_rect: Rect,
}

impl CanvasInput {
    pub fn new(canvas_rect: Rect) -> Self {
        Self { canvas_rect }
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Gather this frame's events. `mid_drag` tells the router a drag is in
    /// flight so it can synthesize a cancellation if the pointer is gone.
    pub fn events(&self, ctx: &Context, response: &Response, mid_drag: bool) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        let pointer = response
            .interact_pointer_pos()
            .or_else(|| response.hover_pos());

        if response.double_clicked() {
            if let Some(pos) = pointer {
                events.push(CanvasEvent::DoubleClick(self.to_local(pos)));
            }
        } else if let Some(pos) = pointer {
            let local = self.to_local(pos);
            // egui resolves a quick press-and-release into a click, not a
            // drag; feed it through as the same down/up pair
            if response.clicked() {
                events.push(CanvasEvent::PointerDown(local));
                events.push(CanvasEvent::PointerUp(local));
            }
            if response.drag_started() {
                events.push(CanvasEvent::PointerDown(local));
            }
            if response.dragged() {
                events.push(CanvasEvent::PointerMoved(local));
            }
            if response.drag_stopped() {
                events.push(CanvasEvent::PointerUp(local));
            }
        }

        // A drag with no pointer left anywhere must not stay stuck
        let pointer_gone =
            ctx.input(|input| !input.pointer.any_down() && input.pointer.hover_pos().is_none());
        if mid_drag && pointer_gone && !response.drag_stopped() {
            events.push(CanvasEvent::PointerCancelled);
        }

        if !ctx.wants_keyboard_input() {
            ctx.input(|input| {
                if input.key_pressed(Key::Delete) || input.key_pressed(Key::Backspace) {
                    events.push(CanvasEvent::DeleteSelection);
                }
                if input.key_pressed(Key::Escape) {
                    events.push(CanvasEvent::Deselect);
                }
                if input.modifiers.command {
                    if input.key_pressed(Key::Z) && input.modifiers.shift {
                        events.push(CanvasEvent::Redo);
                    } else if input.key_pressed(Key::Z) {
                        events.push(CanvasEvent::Undo);
                    }
                    if input.key_pressed(Key::Y) {
                        events.push(CanvasEvent::Redo);
                    }
                    if input.key_pressed(Key::D) {
                        events.push(CanvasEvent::DuplicateSelection);
                    }
                }
            });
        }

        events
    }
}
