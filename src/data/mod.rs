//! Remote data access for the revmeet client.
//!
//! Every row the application displays lives in a hosted backend reached over
//! HTTP: a PostgREST-style data endpoint for collections, a GoTrue-style auth
//! endpoint for sessions, a storage endpoint for avatar uploads, and a public
//! geocoding endpoint for address lookups. This module owns the request
//! construction and the typed decoding of responses; views never touch raw
//! JSON rows.

pub mod auth;
pub mod config;
pub mod events;
pub mod geocode;
pub mod profiles;
pub mod rest;
pub mod storage;
pub mod vehicles;

use thiserror::Error;

pub use config::Config;

#[cfg(test)]
mod tests;

/// Error type for all remote calls issued by the client.
///
/// Views map every variant to a transient notification; no remote failure is
/// fatal to the application and no call is retried automatically.
#[derive(Error, Debug)]
pub enum DataError {
    /// Transport-level failure (request never produced a response).
    #[error("request failed: {0}")]
    Http(String),
    /// The backend answered with a non-success status.
    #[error("backend rejected request with status {code}: {message}")]
    Status { code: u16, message: String },
    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// An operation requiring authentication was attempted without a session.
    #[error("no active session")]
    MissingSession,
}
