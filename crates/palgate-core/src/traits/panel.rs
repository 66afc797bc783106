//! Panel API trait.

use async_trait::async_trait;

use crate::monitor::{Player, SysInfo};
use crate::session::{LoginOutcome, LoginStatus};
use crate::types::PanelUrl;
use crate::{Credentials, Result};

/// The panel's authenticated API surface.
///
/// Implementations own the transport and its cookie-based session state;
/// callers only see typed results. Requests are independent; no operation
/// waits for another, so callers sequence them when ordering matters.
#[async_trait]
pub trait PanelApi: Send + Sync {
    /// Returns the panel base URL for this instance.
    fn url(&self) -> &PanelUrl;

    /// Check whether the current session cookie is still valid.
    ///
    /// A decodable response is returned verbatim; `is_logged_in: false` is
    /// a value, never an error. Transport failures propagate as errors.
    async fn check_login_status(&self) -> Result<LoginStatus>;

    /// Authenticate with the panel.
    ///
    /// On success the server's session cookie lands in the transport's
    /// cookie store, so later requests on the same instance are
    /// authenticated. Logging in again overwrites any existing session.
    async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome>;

    /// Fetch the host and process monitoring snapshot.
    async fn sys_info(&self) -> Result<SysInfo>;

    /// Fetch the known player list.
    ///
    /// With `update` set, the server polls the game process for current
    /// players before responding.
    async fn players(&self, update: bool) -> Result<Vec<Player>>;
}
