//! Errors raised while talking to remote services.

use thiserror::Error;

/// Failure of a call to the quiz server, the inspector or the chat model.
///
/// None of these are retried; callers decide whether to stop or carry on.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never got a response (connection refused, timeout, ...)
    #[error("Could not connect to {service}: {message}")]
    Transport {
        service: &'static str,
        message: String,
    },

    /// The service answered with a non-success status
    #[error("{service} returned HTTP {status}: {message}")]
    Status {
        service: &'static str,
        status: u16,
        message: String,
    },

    /// The response body was not what we expected
    #[error("Failed to parse {service} response: {message}")]
    Decode {
        service: &'static str,
        message: String,
    },
}

impl ClientError {
    /// Which service the failed call was aimed at.
    pub fn service(&self) -> &'static str {
        match self {
            Self::Transport { service, .. }
            | Self::Status { service, .. }
            | Self::Decode { service, .. } => service,
        }
    }
}
