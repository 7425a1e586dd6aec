pub mod canvas_panel;
pub mod export_panel;
pub mod gallery_panel;
pub mod history_panel;
pub mod insights_panel;
pub mod library_panel;
pub mod properties_panel;

pub use canvas_panel::canvas_panel;
pub use export_panel::export_panel;
pub use gallery_panel::gallery_panel;
pub use history_panel::history_panel;
pub use insights_panel::insights_panel;
pub use library_panel::library_panel;
pub use properties_panel::properties_panel;
