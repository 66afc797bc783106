//! Error types for the palgate crates.
//!
//! This module provides a unified error type with explicit variants for
//! transport, route-parameter construction, and input validation errors.
//!
//! An unauthenticated session is deliberately not represented here: the
//! server reports it in-band as `is_logged_in: false` inside a
//! [`LoginStatus`](crate::session::LoginStatus), and callers must treat that
//! as a value, not a failure.

use thiserror::Error;

/// The unified error type for palgate operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, undecodable response).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A route-parameter constructor rejected its raw input.
    #[error("parameter construction failed: {0}")]
    Construction(#[from] ConstructionError),

    /// Input validation errors (invalid panel URL or route pattern).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
///
/// These always surface to the caller; no operation converts them into a
/// default result value.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Non-success HTTP status without a body decodable to the expected type.
    #[error("HTTP {status} with no decodable body")]
    Status { status: u16 },

    /// Successful HTTP status but the body did not decode.
    #[error("could not decode response body: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A route-parameter constructor rejected its raw string input.
///
/// Surfaced by the router as a navigation failure; the navigation never
/// substitutes a default value instead.
#[derive(Debug, Error)]
#[error("constructor rejected parameter '{param}' = '{value}': {reason}")]
pub struct ConstructionError {
    /// Name of the route parameter.
    pub param: String,
    /// Raw string value that was rejected.
    pub value: String,
    /// Constructor-provided reason.
    pub reason: String,
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid panel base URL.
    #[error("invalid panel URL '{value}': {reason}")]
    PanelUrl { value: String, reason: String },

    /// Invalid route pattern.
    #[error("invalid route pattern '{value}': {reason}")]
    RoutePattern { value: String, reason: String },
}
