use crate::app::BuilderApp;
use crate::document::ElementPatch;
use egui::{DragValue, pos2, vec2};

/// Right-hand property editor: a pure projection of the selected element.
/// Every control writes through `EditorView::apply_patch`; numeric values
/// are deliberately not clamped (a typed value is declared intent, unlike
/// drag moves). Edits coalesce into one history entry per completed widget
/// interaction.
pub fn properties_panel(app: &mut BuilderApp, ctx: &egui::Context) {
    egui::SidePanel::right("properties_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Properties");
            ui.separator();

            let Some(element) = app.editor().selected_element() else {
                ui.label("Nothing selected.");
                ui.label("Click an element on the canvas to edit it.");
                return;
            };

            let id = element.id;
            let kind = element.kind;
            let fields = kind.field_set();
            let mut content = element.content.clone();
            let mut position = element.position;
            let size = element.size;
            let footprint = element.footprint();
            let style = element.style.clone();

            ui.label(format!("{} ({id})", kind.label()));
            ui.separator();

            // Tracks whether any widget finished its interaction this frame
            let mut finished = false;

            if fields.content {
                ui.label("Content");
                let response = ui.text_edit_singleline(&mut content);
                if response.changed() {
                    app.editor_mut().apply_patch(id, ElementPatch::content(content));
                }
                finished |= response.lost_focus();
            }

            ui.add_space(6.0);
            ui.label("Position");
            ui.horizontal(|ui| {
                ui.label("x");
                let rx = ui.add(DragValue::new(&mut position.x).speed(1.0));
                ui.label("y");
                let ry = ui.add(DragValue::new(&mut position.y).speed(1.0));
                if rx.changed() || ry.changed() {
                    app.editor_mut()
                        .apply_patch(id, ElementPatch::position(pos2(position.x, position.y)));
                }
                finished |= rx.drag_stopped() || rx.lost_focus();
                finished |= ry.drag_stopped() || ry.lost_focus();
            });

            ui.add_space(6.0);
            ui.label("Size");
            let mut auto = size.is_none();
            if ui.checkbox(&mut auto, "Auto (intrinsic)").changed() {
                let patch = if auto {
                    ElementPatch {
                        auto_size: true,
                        ..ElementPatch::default()
                    }
                } else {
                    ElementPatch {
                        size: Some(footprint),
                        ..ElementPatch::default()
                    }
                };
                app.editor_mut().apply_patch(id, patch);
                finished = true;
            }
            if let Some(mut explicit) = size {
                ui.horizontal(|ui| {
                    ui.label("w");
                    let rw = ui.add(DragValue::new(&mut explicit.x).speed(1.0));
                    ui.label("h");
                    let rh = ui.add(DragValue::new(&mut explicit.y).speed(1.0));
                    if rw.changed() || rh.changed() {
                        app.editor_mut().apply_patch(
                            id,
                            ElementPatch {
                                size: Some(vec2(explicit.x, explicit.y)),
                                ..ElementPatch::default()
                            },
                        );
                    }
                    finished |= rw.drag_stopped() || rw.lost_focus();
                    finished |= rh.drag_stopped() || rh.lost_focus();
                });
            }

            if fields.font {
                ui.add_space(6.0);
                ui.label("Typography");
                finished |= style_field(app, ui, id, &style, "fontSize", "Size");
                finished |= style_field(app, ui, id, &style, "fontFamily", "Font");
                finished |= style_field(app, ui, id, &style, "color", "Color");
            }

            if fields.background {
                ui.add_space(6.0);
                ui.label("Background");
                finished |= style_field(app, ui, id, &style, "backgroundColor", "Fill");
                finished |= style_field(app, ui, id, &style, "borderRadius", "Radius");
                finished |= style_field(app, ui, id, &style, "padding", "Padding");
            }

            if finished {
                let label = kind.label();
                app.editor_mut()
                    .commit_pending_edit(format!("Edited {label}"));
            }
        });
}

/// One style key as a free-form text field. Returns true when the widget
/// interaction finished (so the caller can commit the coalesced entry).
fn style_field(
    app: &mut BuilderApp,
    ui: &mut egui::Ui,
    id: crate::element::ElementId,
    style: &crate::element::StyleMap,
    key: &str,
    label: &str,
) -> bool {
    let mut value = style.get(key).unwrap_or("").to_owned();
    let mut finished = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let response = ui.text_edit_singleline(&mut value);
        if response.changed() {
            app.editor_mut().apply_patch(id, ElementPatch::style(key, &value));
        }
        finished = response.lost_focus();
    });
    finished
}
