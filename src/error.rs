use thiserror::Error;

/// Top-level error for a reconciliation run. Every variant is terminal for
/// the invocation; the process maps all of them to the single "failed" exit
/// status and keeps the kind visible only in the diagnostic output.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("zone not found: {0}")]
    ZoneNotFound(String),

    #[error("record not found: {0}")]
    RecordNotFound(String),

    #[error("update verification failed: {0}")]
    UpdateVerificationFailed(String),
}
