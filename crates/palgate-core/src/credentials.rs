//! Login credentials type.

use std::fmt;

/// The username/password pair sent in a login request body.
///
/// Credentials travel only in the request body, never in a URL or header,
/// and the password is masked in `Debug` so an instrumented call cannot
/// leak it into logs.
///
/// # Example
///
/// ```
/// use palgate_core::Credentials;
///
/// let creds = Credentials::new("admin", "hunter2");
/// assert_eq!(creds.username(), "admin");
/// ```
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password, for building a login request body only.
    pub fn password(&self) -> &str {
        &self.password
    }
}

// Mask the password; instrument macros render arguments with Debug.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
