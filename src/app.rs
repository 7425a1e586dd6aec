use crate::editor::EditorView;
use crate::export;
use crate::gallery::GalleryFilter;
use crate::panels;
use crate::panels::insights_panel::InsightsTab;
use crate::renderer::Renderer;
use crate::session::SessionState;
use crate::util::time;
use egui::{Align2, vec2};

/// Top-level screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Gallery,
    Editor,
}

/// Transient notification shown in the corner until it expires
struct Toast {
    message: String,
    expires_at: f64,
}

/// The application shell: owns the editor instance, the gallery state and
/// the presentational windows, and routes each frame to the panels.
///
/// The session is injected read-only at construction; the document and its
/// history live only for this session (persistence belongs to the external
/// backend, not this editor).
pub struct BuilderApp {
    pub view: View,
    editor: EditorView,
    renderer: Renderer,
    session: SessionState,
    design_name: String,

    pub gallery_filter: GalleryFilter,
    pub show_history: bool,
    pub show_export: bool,
    pub show_insights: bool,
    pub insights_tab: InsightsTab,
    /// Epoch time the simulated publish finishes, if one is running
    pub publish_finish: Option<f64>,

    toasts: Vec<Toast>,
}

impl BuilderApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, session: SessionState) -> Self {
        Self {
            view: View::Gallery,
            editor: EditorView::new(),
            renderer: Renderer::new(),
            session,
            design_name: "my-site".to_owned(),
            gallery_filter: GalleryFilter::default(),
            show_history: false,
            show_export: false,
            show_insights: false,
            insights_tab: InsightsTab::default(),
            publish_finish: None,
            toasts: Vec::new(),
        }
    }

    pub fn editor(&self) -> &EditorView {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorView {
        &mut self.editor
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn toast(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast {
            message: message.into(),
            expires_at: time::epoch_secs() + 4.0,
        });
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("pagecraft");
                ui.separator();

                if ui
                    .selectable_label(self.view == View::Gallery, "Templates")
                    .clicked()
                {
                    self.view = View::Gallery;
                }
                if ui
                    .selectable_label(self.view == View::Editor, "Editor")
                    .clicked()
                {
                    self.view = View::Editor;
                }
                ui.separator();

                ui.add(
                    egui::TextEdit::singleline(&mut self.design_name)
                        .desired_width(120.0)
                        .hint_text("site name"),
                );
                if ui.button("Save").clicked() {
                    self.editor.save_snapshot();
                    self.toast("Design saved");
                }
                ui.toggle_value(&mut self.show_history, "History");
                ui.toggle_value(&mut self.show_export, "Export");
                ui.toggle_value(&mut self.show_insights, "Insights");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let SessionState::Authenticated(profile) = &self.session {
                        ui.weak(format!("{} plan", profile.plan.label()));
                    }
                    ui.label(self.session.display_name());
                });
            });
        });
    }

    /// Finish a simulated publish once its timer elapses
    fn tick_publish(&mut self) {
        if let Some(finish) = self.publish_finish {
            if time::epoch_secs() >= finish {
                self.publish_finish = None;
                let url = export::fabricated_publish_url(&self.design_name);
                log::info!("simulated publish finished: {url}");
                self.toast(format!("Published to {url} (simulated)"));
            }
        }
    }

    fn draw_toasts(&mut self, ctx: &egui::Context) {
        let now = time::epoch_secs();
        self.toasts.retain(|toast| toast.expires_at > now);
        if self.toasts.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, vec2(-16.0, -16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(&toast.message);
                    });
                }
            });
    }
}

impl eframe::App for BuilderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick_publish();
        self.top_bar(ctx);

        match self.view {
            View::Gallery => panels::gallery_panel(self, ctx),
            View::Editor => {
                panels::library_panel(self, ctx);
                panels::properties_panel(self, ctx);
                panels::canvas_panel(self, ctx);
            }
        }

        if self.show_history {
            panels::history_panel(self, ctx);
        }
        if self.show_export {
            panels::export_panel(self, ctx);
        }
        if self.show_insights {
            panels::insights_panel(self, ctx);
        }

        self.draw_toasts(ctx);

        // Keep the publish timer and toast expiry moving
        if self.publish_finish.is_some() || !self.toasts.is_empty() {
            ctx.request_repaint();
        }
    }
}
