//! Core traits for panel API behavior.

mod panel;

pub use panel::PanelApi;
