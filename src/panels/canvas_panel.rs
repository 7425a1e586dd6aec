use crate::app::BuilderApp;
use crate::input::{CanvasEvent, CanvasInput};
use egui::{Rect, vec2};

/// The central canvas: routes pointer/keyboard traffic into the editor's
/// state machine, paints the document, and overlays the per-element
/// controls and the in-place text editor. All mutation goes through the
/// editor's entry points.
pub fn canvas_panel(app: &mut BuilderApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_size();
        let (response, painter) = ui.allocate_painter(available, egui::Sense::click_and_drag());
        let canvas_rect = response.rect;
        app.editor_mut().set_canvas_size(canvas_rect.size());

        let router = CanvasInput::new(canvas_rect);
        let mid_drag = app.editor().interaction().is_dragging();
        for event in router.events(ctx, &response, mid_drag) {
            dispatch(app, event);
        }

        let hovered = response
            .hover_pos()
            .and_then(|pos| {
                app.editor()
                    .document()
                    .topmost_at((pos - canvas_rect.min).to_pos2())
            })
            .map(|el| el.id);
        let selected = app.editor().selected_id();
        app.renderer()
            .render(&painter, canvas_rect, app.editor().document(), selected, hovered);

        element_controls(app, ui, canvas_rect);
        inline_editor(app, ui, canvas_rect);
    });
}

fn dispatch(app: &mut BuilderApp, event: CanvasEvent) {
    let editor = app.editor_mut();
    match event {
        CanvasEvent::PointerDown(pos) => editor.pointer_down(pos),
        CanvasEvent::PointerMoved(pos) => editor.pointer_moved(pos),
        CanvasEvent::PointerUp(pos) => editor.pointer_released(pos),
        CanvasEvent::PointerCancelled => editor.pointer_cancelled(),
        CanvasEvent::DoubleClick(pos) => editor.double_click(pos),
        CanvasEvent::DeleteSelection => editor.delete_selected(),
        CanvasEvent::DuplicateSelection => {
            editor.duplicate_selected();
        }
        CanvasEvent::Undo => {
            editor.undo();
        }
        CanvasEvent::Redo => {
            editor.redo();
        }
        CanvasEvent::Deselect => {
            if editor.interaction().is_editing() {
                editor.cancel_inline_edit();
            } else {
                editor.deselect();
            }
        }
    }
}

/// Floating duplicate/edit/delete controls above the selected element
fn element_controls(app: &mut BuilderApp, ui: &mut egui::Ui, canvas_rect: Rect) {
    if app.editor().interaction().is_dragging() || app.editor().interaction().is_editing() {
        return;
    }
    let Some(element) = app.editor().selected_element() else {
        return;
    };
    let (id, can_edit) = (element.id, element.kind.supports_inline_edit());
    let rect = element.rect().translate(canvas_rect.min.to_vec2());

    let button_size = vec2(24.0, 20.0);
    let mut anchor = rect.left_top() - vec2(0.0, button_size.y + 6.0);
    anchor.y = anchor.y.max(canvas_rect.min.y);

    let place = |ui: &mut egui::Ui, offset: f32, label: &str| {
        ui.put(
            Rect::from_min_size(anchor + vec2(offset, 0.0), button_size),
            egui::Button::new(egui::RichText::new(label).size(11.0)),
        )
        .clicked()
    };

    if place(ui, 0.0, "⧉") {
        app.editor_mut().duplicate_element(id);
    }
    if can_edit && place(ui, button_size.x + 4.0, "✏") {
        app.editor_mut().begin_inline_edit(id);
    }
    if place(ui, (button_size.x + 4.0) * 2.0, "🗑") {
        app.editor_mut().delete_element(id);
    }
}

/// In-place text editor bound to the interaction draft
fn inline_editor(app: &mut BuilderApp, ui: &mut egui::Ui, canvas_rect: Rect) {
    if !app.editor().interaction().is_editing() {
        return;
    }
    // Escape abandons the draft. Checked before the text widget exists this
    // frame, so the focus loss Escape triggers cannot commit instead.
    if ui.input(|input| input.key_pressed(egui::Key::Escape)) {
        app.editor_mut().cancel_inline_edit();
        return;
    }
    let Some(rect) = app
        .editor()
        .selected_element()
        .map(|el| el.rect().translate(canvas_rect.min.to_vec2()))
    else {
        return;
    };

    let grab_focus = app.editor_mut().take_inline_focus_request();
    let mut commit = false;
    if let Some((_, draft)) = app.editor_mut().inline_edit_mut() {
        let response = ui.put(
            rect,
            egui::TextEdit::singleline(draft).hint_text("(empty)"),
        );
        if grab_focus {
            response.request_focus();
        }
        if response.lost_focus() {
            commit = true;
        }
    }
    if commit {
        app.editor_mut().commit_inline_edit();
    }
}
