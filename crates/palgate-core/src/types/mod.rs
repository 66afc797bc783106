//! Core panel types.
//!
//! These types enforce invariants at construction time, ensuring invalid
//! states are unrepresentable.

mod panel_url;

pub use panel_url::PanelUrl;
