//! palgate-client - HTTP panel client with cookie-based session handling.

mod http;
mod panel;

pub use panel::PanelClient;
