#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod document;
pub mod editor;
pub mod element;
pub mod error;
pub mod export;
pub mod gallery;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod session;
pub mod templates;
pub mod util;

pub use app::BuilderApp;
pub use document::{Document, ElementPatch};
pub use editor::{EditorView, Interaction};
pub use element::{Element, ElementId, ElementKind, StyleMap};
pub use error::EditorError;
pub use history::{ActionKind, History, HistoryEntry};
pub use input::{CanvasEvent, CanvasInput};
pub use renderer::Renderer;
pub use session::SessionState;
