use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloudflareError {
    /// Transport-level failure: DNS resolution, TLS, connection, timeout.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered but flagged the request as unsuccessful.
    #[error("API error: {0}")]
    Api(String),

    #[error("no zone found for {0}")]
    ZoneNotFound(String),

    #[error("no {record_type} record found for {name}")]
    RecordNotFound {
        name: String,
        record_type: &'static str,
    },

    /// The write went through on the wire but the provider did not confirm
    /// it.
    #[error("update not confirmed by provider: {0}")]
    UpdateRejected(String),
}

use crate::error::Error;

pub fn map_error(e: CloudflareError) -> Error {
    use CloudflareError::*;
    match e {
        Http(err) => Error::Transport(err.to_string()),
        Api(msg) => Error::Provider(msg),
        ZoneNotFound(domain) => Error::ZoneNotFound(domain),
        RecordNotFound { name, record_type } => {
            Error::RecordNotFound(format!("{name} ({record_type})"))
        }
        UpdateRejected(msg) => Error::UpdateVerificationFailed(msg),
    }
}
