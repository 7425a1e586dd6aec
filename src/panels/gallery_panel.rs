use crate::app::{BuilderApp, View};
use crate::gallery::{self, SortKey};
use crate::templates;

/// Template gallery view: search/filter/sort over the static catalog and
/// the "use template" handoff into the editor.
pub fn gallery_panel(app: &mut BuilderApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Template Gallery");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Search");
            ui.text_edit_singleline(&mut app.gallery_filter.query);

            let selected = app
                .gallery_filter
                .category
                .clone()
                .unwrap_or_else(|| "All".to_owned());
            egui::ComboBox::from_id_salt("gallery_category")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    if ui
                        .selectable_label(app.gallery_filter.category.is_none(), "All")
                        .clicked()
                    {
                        app.gallery_filter.category = None;
                    }
                    for category in gallery::categories(templates::catalog()) {
                        let active =
                            app.gallery_filter.category.as_deref() == Some(category);
                        if ui.selectable_label(active, category).clicked() {
                            app.gallery_filter.category = Some(category.to_owned());
                        }
                    }
                });

            egui::ComboBox::from_id_salt("gallery_sort")
                .selected_text(format!("Sort: {}", app.gallery_filter.sort.label()))
                .show_ui(ui, |ui| {
                    for key in SortKey::ALL {
                        if ui
                            .selectable_label(app.gallery_filter.sort == key, key.label())
                            .clicked()
                        {
                            app.gallery_filter.sort = key;
                        }
                    }
                });
        });
        ui.separator();

        let matches = gallery::filter_templates(templates::catalog(), &app.gallery_filter);
        if matches.is_empty() {
            ui.label("No templates match your search.");
            return;
        }

        let mut chosen = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            for template in matches {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.strong(template.name);
                            ui.label(template.description);
                            ui.label(format!(
                                "{} · {}",
                                template.category,
                                template.tags.join(", ")
                            ));
                        });
                        if ui.button("Use template").clicked() {
                            chosen = Some(*template);
                        }
                    });
                });
                ui.add_space(4.0);
            }
        });

        if let Some(template) = chosen {
            app.editor_mut()
                .load_template(template.name, template.blueprints());
            app.view = View::Editor;
            app.toast(format!("Loaded preset: {}", template.name));
        }
    });
}
