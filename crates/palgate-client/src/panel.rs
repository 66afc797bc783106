//! Reqwest-backed panel API client.

use async_trait::async_trait;
use tracing::{debug, instrument};

use palgate_core::monitor::{Player, SysInfo};
use palgate_core::session::{LoginOutcome, LoginStatus};
use palgate_core::traits::PanelApi;
use palgate_core::types::PanelUrl;
use palgate_core::{Credentials, Result};

use crate::http::HttpTransport;

/// Endpoint for session status checks.
const CHECK_LOGIN_STATUS: &str = "/api/check-login-status";

/// Endpoint for login.
const LOGIN: &str = "/api/login";

/// Endpoint for the host/process monitoring snapshot.
const STATUS: &str = "/api/status";

/// Endpoint for the player list.
const PLAYER: &str = "/api/player";

/// Request body for login.
#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// The panel API client.
///
/// One long-lived instance per application: the underlying transport and
/// its cookie store are the session's home, so cloning shares the session
/// (reqwest clients are internally reference-counted) and dropping the last
/// clone tears it down.
#[derive(Debug, Clone)]
pub struct PanelClient {
    base: PanelUrl,
    http: HttpTransport,
}

impl PanelClient {
    /// Create a new client for the given panel.
    pub fn new(base: PanelUrl) -> Self {
        let http = HttpTransport::new(base.clone());
        Self { base, http }
    }
}

#[async_trait]
impl PanelApi for PanelClient {
    fn url(&self) -> &PanelUrl {
        &self.base
    }

    #[instrument(skip(self), fields(panel = %self.base))]
    async fn check_login_status(&self) -> Result<LoginStatus> {
        debug!("Checking login status");
        self.http.get(CHECK_LOGIN_STATUS).await
    }

    #[instrument(skip(self, credentials), fields(panel = %self.base, username = credentials.username()))]
    async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome> {
        debug!("Logging in");

        let request = LoginRequest {
            username: credentials.username(),
            password: credentials.password(),
        };

        // A successful response also carries Set-Cookie; the transport's
        // cookie store absorbs it, replacing any previous session.
        self.http.post_json(LOGIN, &request).await
    }

    #[instrument(skip(self), fields(panel = %self.base))]
    async fn sys_info(&self) -> Result<SysInfo> {
        debug!("Fetching system info");
        self.http.get(STATUS).await
    }

    #[instrument(skip(self), fields(panel = %self.base))]
    async fn players(&self, update: bool) -> Result<Vec<Player>> {
        debug!(update, "Fetching player list");

        if update {
            self.http.get_query(PLAYER, &[("update", "true")]).await
        } else {
            self.http.get(PLAYER).await
        }
    }
}
