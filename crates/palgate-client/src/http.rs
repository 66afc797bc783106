//! Cookie-persisting HTTP transport.

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, trace};

use palgate_core::error::{Error, TransportError};
use palgate_core::types::PanelUrl;
use palgate_core::Result;

/// HTTP transport for panel requests.
///
/// Built once per client with a cookie store enabled: every request carries
/// the stored session cookie, and any cookie a response sets (including a
/// replacement on re-login) is persisted for subsequent requests. The
/// session itself never leaves the store.
#[derive(Debug, Clone)]
pub(crate) struct HttpTransport {
    client: reqwest::Client,
    base: PanelUrl,
}

impl HttpTransport {
    /// Create a new transport for the given panel.
    pub(crate) fn new(base: PanelUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("palgate/", env!("CARGO_PKG_VERSION")))
            .cookie_store(true)
            .build()
            .expect("failed to build HTTP client");

        Self { client, base }
    }

    /// Make a read request (GET) to an endpoint path.
    pub(crate) async fn get<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.base.endpoint_url(path);
        debug!(path, "panel GET");

        let sent = self.client.get(&url).send().await;
        self.handle_response(path, sent).await
    }

    /// Make a read request (GET) with query parameters.
    pub(crate) async fn get_query<Q, R>(&self, path: &str, query: &Q) -> Result<R>
    where
        Q: Serialize + std::fmt::Debug + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint_url(path);
        debug!(path, "panel GET");
        trace!(?query, "query parameters");

        let sent = self.client.get(&url).query(query).send().await;
        self.handle_response(path, sent).await
    }

    /// Make a write request (POST) with a JSON body.
    ///
    /// Credentials and other sensitive fields belong in the body, never in
    /// the URL or headers; the body itself is not logged.
    pub(crate) async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint_url(path);
        debug!(path, "panel POST");

        let sent = self.client.post(&url).json(body).send().await;
        self.handle_response(path, sent).await
    }

    /// Single interception point for every response.
    ///
    /// All failures are logged exactly once here and propagated unchanged,
    /// so individual operations never repeat the log-then-rethrow pattern
    /// and never swallow an error into a default value.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        path: &str,
        sent: reqwest::Result<reqwest::Response>,
    ) -> Result<R> {
        match self.decode_response(sent).await {
            Ok(value) => Ok(value),
            Err(err) => {
                error!(panel = %self.base, path, %err, "panel request failed");
                Err(err)
            }
        }
    }

    /// Decode a response body, or classify the failure.
    ///
    /// The body is decoded regardless of status: the panel reports
    /// application-level outcomes (invalid credentials, missing session)
    /// in-band with decodable bodies, sometimes on non-2xx statuses. Only a
    /// status without a decodable body is a transport failure.
    async fn decode_response<R: DeserializeOwned>(
        &self,
        sent: reqwest::Result<reqwest::Response>,
    ) -> Result<R> {
        let response = sent.map_err(into_transport)?;
        let status = response.status();
        trace!(status = %status, "panel response");

        let bytes = response.bytes().await.map_err(into_transport)?;
        match serde_json::from_slice::<R>(&bytes) {
            Ok(body) => Ok(body),
            Err(decode) if status.is_success() => Err(Error::Transport(TransportError::Decode {
                message: decode.to_string(),
            })),
            Err(_) => Err(Error::Transport(status_error(status))),
        }
    }
}

fn status_error(status: StatusCode) -> TransportError {
    TransportError::Status {
        status: status.as_u16(),
    }
}

/// Map a reqwest failure into the transport taxonomy.
fn into_transport(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}
