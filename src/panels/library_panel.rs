use crate::app::BuilderApp;
use crate::element::ElementKind;
use crate::templates;

/// Left-hand element library: the catalog of addable kinds plus one-click
/// preset loading and the undo/redo pair.
pub fn library_panel(app: &mut BuilderApp, ctx: &egui::Context) {
    egui::SidePanel::left("library_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Library");

            ui.horizontal(|ui| {
                let can_undo = app.editor().history().can_undo();
                let can_redo = app.editor().history().can_redo();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.editor_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.editor_mut().redo();
                }
            });
            ui.separator();

            ui.label("Elements");
            for kind in ElementKind::ALL {
                if ui.button(kind.label()).clicked() {
                    app.editor_mut().request_add_element(kind);
                }
            }

            ui.separator();
            ui.label("Presets");
            for template in templates::catalog() {
                ui.horizontal(|ui| {
                    ui.label(template.name);
                    if ui.small_button("Load").clicked() {
                        app.editor_mut()
                            .load_template(template.name, template.blueprints());
                        app.toast(format!("Loaded preset: {}", template.name));
                    }
                });
            }
        });
}
