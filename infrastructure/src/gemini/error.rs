//! Error types for the Gemini adapter

use storybook_application::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the Gemini REST API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Invalid image payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Request blocked: {0}")]
    Blocked(String),

    #[error("Response contained no content")]
    EmptyResponse,
}

impl From<GeminiError> for GatewayError {
    fn from(error: GeminiError) -> Self {
        match error {
            GeminiError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            GeminiError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            GeminiError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            GeminiError::Api { status, message } => GatewayError::Api { status, message },
            GeminiError::Blocked(reason) => GatewayError::Blocked(reason),
            e @ (GeminiError::Serialization(_)
            | GeminiError::ParseError { .. }
            | GeminiError::Decode(_)
            | GeminiError::EmptyResponse) => GatewayError::MalformedResponse(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_maps_to_gateway_api() {
        let err: GatewayError = GeminiError::Api {
            status: 403,
            message: "API key not valid".to_string(),
        }
        .into();
        assert!(matches!(err, GatewayError::Api { status: 403, .. }));
    }

    #[test]
    fn test_parse_failures_map_to_malformed() {
        let err: GatewayError = GeminiError::EmptyResponse.into();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));

        let err: GatewayError = GeminiError::ParseError {
            error: "expected value".to_string(),
            raw: "<html>".to_string(),
        }
        .into();
        assert!(err.to_string().contains("<html>"));
    }
}
