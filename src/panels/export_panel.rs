use crate::app::BuilderApp;
use crate::export;
use crate::util::time;

/// Export/publish window. The payload is the serialized element
/// collection; everything downstream of it (code generation, deployment)
/// is simulated and labeled as such.
pub fn export_panel(app: &mut BuilderApp, ctx: &egui::Context) {
    let mut open = app.show_export;
    egui::Window::new("Export & Publish")
        .open(&mut open)
        .default_width(420.0)
        .show(ctx, |ui| {
            let payload = match export::export_payload(app.editor().document().elements()) {
                Ok(payload) => payload,
                Err(err) => {
                    ui.label(format!("Export failed: {err}"));
                    return;
                }
            };

            ui.label(format!(
                "{} elements, {} bytes of JSON",
                app.editor().document().len(),
                payload.len()
            ));
            egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut payload.as_str())
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY),
                );
            });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Copy JSON").clicked() {
                    ctx.copy_text(payload.clone());
                    app.toast("Payload copied to clipboard");
                }

                let publishing = app.publish_finish.is_some();
                if publishing {
                    ui.spinner();
                    ui.label("Publishing…");
                } else if ui.button("Publish (simulated)").clicked() {
                    app.publish_finish = Some(time::epoch_secs() + 1.5);
                }
            });
        });
    app.show_export = open;
}
