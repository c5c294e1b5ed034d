//! API error taxonomy
//!
//! Every response outside the success range is translated into one of these
//! variants; `Display` is the user-facing message.

use thiserror::Error;

/// Fallback when the server's error body carries no usable message.
const GENERIC_MESSAGE: &str = "Request failed";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server rejected the presented credentials (401).
    #[error("{0}")]
    Unauthorized(String),

    /// The server refused the request; carries the server-supplied message.
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// A success response whose body could not be decoded.
    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Map a non-2xx status and (optional) server message to a typed failure.
pub fn classify(status: u16, message: Option<String>) -> ApiError {
    let message = message.unwrap_or_else(|| GENERIC_MESSAGE.to_string());
    if status == 401 {
        ApiError::Unauthorized(message)
    } else {
        ApiError::Rejected(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bad_credentials() {
        let err = classify(401, Some("Invalid phone or password".to_string()));
        assert_eq!(
            err,
            ApiError::Unauthorized("Invalid phone or password".to_string())
        );
    }

    #[test]
    fn test_classify_falls_back_to_generic_message() {
        let err = classify(500, None);
        assert_eq!(err, ApiError::Rejected(GENERIC_MESSAGE.to_string()));
    }

    #[test]
    fn test_display_is_the_bare_server_message() {
        let err = classify(422, Some("End date precedes start date".to_string()));
        assert_eq!(err.to_string(), "End date precedes start date");
    }
}
