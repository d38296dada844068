//! Error types for the restmail client.

use thiserror::Error;

/// Error type for all restmail client operations.
///
/// The restmail service never gates its two endpoints behind status codes
/// this client cares about, so there is no status-based variant: a call
/// either fails to complete at the transport level or returns a body that
/// does not decode as a message array.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be built or the network round trip failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not a JSON array of messages.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
