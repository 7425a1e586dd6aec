use crate::app::BuilderApp;

/// Tabs of the insights window. All data here is fabricated; these
/// surfaces exist so the shell matches the product, not to do real work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsightsTab {
    #[default]
    Analytics,
    Integrations,
    Collaboration,
}

pub fn insights_panel(app: &mut BuilderApp, ctx: &egui::Context) {
    let mut open = app.show_insights;
    egui::Window::new("Insights")
        .open(&mut open)
        .default_width(360.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (tab, label) in [
                    (InsightsTab::Analytics, "Analytics"),
                    (InsightsTab::Integrations, "Integrations"),
                    (InsightsTab::Collaboration, "Collaboration"),
                ] {
                    if ui.selectable_label(app.insights_tab == tab, label).clicked() {
                        app.insights_tab = tab;
                    }
                }
            });
            ui.separator();

            match app.insights_tab {
                InsightsTab::Analytics => analytics(ui),
                InsightsTab::Integrations => integrations(app, ui),
                InsightsTab::Collaboration => collaboration(app, ui),
            }
        });
    app.show_insights = open;
}

fn analytics(ui: &mut egui::Ui) {
    egui::Grid::new("analytics_grid")
        .num_columns(2)
        .spacing([40.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            for (metric, value) in [
                ("Visitors (30d)", "4,812"),
                ("Page views", "11,209"),
                ("Bounce rate", "38%"),
                ("Top referrer", "search"),
            ] {
                ui.label(metric);
                ui.label(value);
                ui.end_row();
            }
        });
    ui.add_space(4.0);
    ui.small("Sample data. Analytics go live after publishing.");
}

fn integrations(app: &mut BuilderApp, ui: &mut egui::Ui) {
    for service in ["Mailchimp", "Stripe", "Google Analytics", "Zapier"] {
        ui.horizontal(|ui| {
            ui.label(service);
            if ui.small_button("Connect").clicked() {
                app.toast(format!("{service} connection is not available in the demo"));
            }
        });
    }
}

fn collaboration(app: &mut BuilderApp, ui: &mut egui::Ui) {
    for (name, role) in [("Sam Carter", "Owner"), ("Ada Velasquez", "Editor"), ("Ben Okafor", "Viewer")] {
        ui.horizontal(|ui| {
            ui.label(name);
            ui.weak(role);
        });
    }
    ui.add_space(4.0);
    if ui.button("Invite collaborator").clicked() {
        app.toast("Invites are not available in the demo");
    }
}
