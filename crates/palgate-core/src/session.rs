//! Session status wire types.
//!
//! The session itself is an opaque cookie held by the transport; the client
//! never inspects it. These types only describe what the server reports
//! about it.

use serde::{Deserialize, Serialize};

/// Result of a login status check (`GET /api/check-login-status`).
///
/// An absent session is `is_logged_in: false` with no `error`: a value,
/// not a failure. `error` carries the server's explanation when the
/// check itself did not complete normally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginStatus {
    /// Whether the session cookie sent with the request is valid.
    pub is_logged_in: bool,
    /// Server-side explanation, if the check did not complete normally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of a login attempt (`POST /api/login`).
///
/// No error field: transport failures travel on the error channel instead,
/// and invalid credentials come back as `is_logged_in: false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutcome {
    /// Whether the server accepted the credentials and issued a session.
    pub is_logged_in: bool,
}
