//! palgate-core - Core types and traits for the palgate panel client.

pub mod credentials;
pub mod error;
pub mod monitor;
pub mod session;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::{ConstructionError, Error, InvalidInputError, TransportError};
pub use monitor::{DiskInfo, MemoryInfo, Player, ProcessInfo, SysInfo};
pub use session::{LoginOutcome, LoginStatus};
pub use traits::PanelApi;
pub use types::PanelUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
