use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failure while turning a CLI argument into a target list.
///
/// Raised only when the argument names an existing path that cannot be
/// read; a non-existent path is not an error, it is a literal target.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read target list '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure of a single probe. Never fatal to the scan.
///
/// Carries rendered messages rather than client errors so stubbed probers
/// can produce them without a live HTTP stack.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The derived request could not be constructed.
    #[error("invalid probe request: {0}")]
    Request(String),

    /// Connect, timeout, TLS handshake, or any other transport failure.
    #[error("transport failure: {0}")]
    Transport(String),
}
