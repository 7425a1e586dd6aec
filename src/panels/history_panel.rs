use crate::app::BuilderApp;
use crate::util::time;
use uuid::Uuid;

/// History window: the entry list with the cursor highlighted, per-entry
/// restore, undo/redo and clear. Restoring is a cursor jump, it records
/// nothing itself.
pub fn history_panel(app: &mut BuilderApp, ctx: &egui::Context) {
    let mut open = app.show_history;
    egui::Window::new("History")
        .open(&mut open)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let can_undo = app.editor().history().can_undo();
                let can_redo = app.editor().history().can_redo();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.editor_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.editor_mut().redo();
                }
                let any = !app.editor().history().is_empty();
                if ui.add_enabled(any, egui::Button::new("Clear")).clicked() {
                    app.editor_mut().clear_history();
                }
            });
            ui.separator();

            if app.editor().history().is_empty() {
                ui.label("No changes yet.");
                return;
            }

            let mut restore_request: Option<Uuid> = None;
            let cursor = app.editor().history().cursor();
            egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                // Newest first
                for (index, entry) in app.editor().history().entries().iter().enumerate().rev() {
                    let current = cursor == Some(index);
                    ui.horizontal(|ui| {
                        let text = format!(
                            "{} {} — {} ({})",
                            entry.kind.icon(),
                            entry.description,
                            entry.kind.label(),
                            time::format_relative(entry.timestamp),
                        );
                        // Clicking an entry jumps the cursor to it
                        if ui.selectable_label(current, text).clicked() && !current {
                            restore_request = Some(entry.id);
                        }
                        if !current && ui.small_button("Restore").clicked() {
                            restore_request = Some(entry.id);
                        }
                    });
                }
            });

            if let Some(entry_id) = restore_request {
                if let Err(err) = app.editor_mut().restore_entry(entry_id) {
                    log::warn!("restore failed: {err}");
                    app.toast(format!("Restore failed: {err}"));
                }
            }
        });
    app.show_history = open;
}
