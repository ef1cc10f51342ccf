use shared::ApiErrorBody;
use thiserror::Error;

/// Fallback message when nothing better can be extracted from a failure.
pub const GENERIC_ERROR: &str = "Something went wrong.";

/// Closed set of failure kinds produced by the service layer.
///
/// Every failure path normalizes into exactly one of these; raw transport
/// errors never escape to callers. The `Display` output is the message the
/// slices store and the UI renders.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Rejected client-side before any network call was made
    #[error("{0}")]
    Validation(String),

    /// No response was received (unreachable host, timeout)
    #[error("Network error")]
    Network,

    /// The backend answered with a failure status
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// Anything else: request build failures, undecodable success bodies
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// Normalize a transport-level failure (no HTTP response available).
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            return ApiError::Network;
        }
        let message = err.to_string();
        if message.trim().is_empty() {
            ApiError::Unexpected(GENERIC_ERROR.to_string())
        } else {
            ApiError::Unexpected(message)
        }
    }

    /// Normalize a failed HTTP response into one descriptive message.
    ///
    /// Precedence: structured error body verbatim, then the fixed per-status
    /// mapping (the 404 message names the entity via `resource`), then the
    /// generic fallback. Total: every input produces a message.
    pub fn from_failure(status: u16, body: &[u8], resource: &str) -> Self {
        if let Ok(parsed) = serde_json::from_slice::<ApiErrorBody>(body) {
            if !parsed.message.is_empty() {
                return ApiError::Backend {
                    status,
                    message: parsed.message.joined(),
                };
            }
        }

        let message = match status {
            400 => "Invalid request parameters.".to_string(),
            401 => "Authentication required.".to_string(),
            403 => "Access denied.".to_string(),
            404 => format!("{resource} not found."),
            429 => "Too many requests. Please try again later.".to_string(),
            500 => "Server error. Please try again.".to_string(),
            _ => GENERIC_ERROR.to_string(),
        };
        ApiError::Backend { status, message }
    }

    /// Normalize a success response whose body could not be decoded.
    pub fn from_decode(err: reqwest::Error) -> Self {
        ApiError::Unexpected(format!("Failed to parse response: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_body_message_wins_over_status_mapping() {
        let err = ApiError::from_failure(500, br#"{"message":"X","statusCode":500}"#, "Article");
        assert_eq!(err.to_string(), "X");
    }

    #[test]
    fn message_fragments_are_joined() {
        let body = br#"{"message":["babyId should not be empty","badgeId should not be empty"],"statusCode":400}"#;
        let err = ApiError::from_failure(400, body, "Badge record");
        assert_eq!(
            err.to_string(),
            "babyId should not be empty. badgeId should not be empty"
        );
    }

    #[test]
    fn bare_404_names_the_resource() {
        let err = ApiError::from_failure(404, b"", "Article");
        assert_eq!(err.to_string(), "Article not found.");
    }

    #[test]
    fn known_statuses_map_to_fixed_messages() {
        let cases = [
            (400, "Invalid request parameters."),
            (401, "Authentication required."),
            (403, "Access denied."),
            (429, "Too many requests. Please try again later."),
            (500, "Server error. Please try again."),
        ];
        for (status, expected) in cases {
            let err = ApiError::from_failure(status, b"not json", "Badge record");
            assert_eq!(err.to_string(), expected, "status {status}");
        }
    }

    #[test]
    fn unknown_status_with_empty_message_falls_back() {
        let err = ApiError::from_failure(502, br#"{"message":"  "}"#, "Post");
        assert_eq!(err.to_string(), GENERIC_ERROR);
    }
}
