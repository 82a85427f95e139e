//! Error taxonomy for a pipeline run. Every variant is fatal to the run.

use std::path::PathBuf;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Missing or malformed configuration (no league id, bad flag value, unreadable config file).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("remote unavailable: {url}: {source}")]
    RemoteUnavailable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote answered, but with an error status or a body we cannot use.
    #[error("bad response from {url}: {reason}")]
    RemoteResponse { url: String, reason: String },

    /// No free port in the scan window.
    #[error("no free port in {first}..={last}")]
    PortExhausted { first: u16, last: u16 },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
