//! Error type for client operations.

use std::time::Duration;

use qiwi_types::ModelError;

/// Failure of a single API call. Nothing is retried; every variant reaches
/// the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request timed out (connect {connect:?}, read {read:?})")]
    TransportTimeout { connect: Duration, read: Duration },

    #[error("API error: HTTP {status} - {body}")]
    RemoteRejection { status: u16, body: String },

    #[error("HTTP error: {0}")]
    TransportFailure(#[source] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A caller-supplied argument cannot be turned into a request.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Raised while building the client, before any request is made.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        ApiError::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_becomes_malformed_response() {
        let err: ApiError = ModelError::MissingField("billId").into();
        assert!(matches!(err, ApiError::MalformedResponse(msg) if msg.contains("billId")));
    }

    #[test]
    fn test_rejection_message() {
        let err = ApiError::RemoteRejection {
            status: 404,
            body: r#"{"errorCode":"api.invoice.not.found"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"API error: HTTP 404 - {"errorCode":"api.invoice.not.found"}"#
        );
    }
}
