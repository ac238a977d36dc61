//! Shared types for the remote resolution layer.

use thiserror::Error;

/// Why a remote resolution attempt produced no usable operation.
///
/// The variants follow the validation order applied to a completion response:
/// transport first, then envelope shape, then presence of a function call,
/// then its arguments, then the function name. Every kind is recovered the
/// same way: the resolver falls back to the local parser.
#[derive(Debug, Error)]
pub enum RemoteFailure {
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("no function call selected")]
    NoSelection,
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("unknown function: {0}")]
    UnknownFunction(String),
}
