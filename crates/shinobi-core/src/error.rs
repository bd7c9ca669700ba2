//! Errors surfaced to catalog consumers.
//!
//! Shape irregularities in upstream payloads are absorbed by the normalizer;
//! what reaches callers is mostly transport-level.

/// Number of body characters kept in a transport failure message.
pub const BODY_PREVIEW_CHARS: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response. `body` is already truncated to [`BODY_PREVIEW_CHARS`].
    #[error("Failed to fetch {resource}. Status: {status}. Body: {body}")]
    Transport {
        resource: String,
        status: u32,
        body: String,
    },

    /// 404 on the single-character endpoint.
    #[error("Character with ID {id} not found.")]
    NotFound { id: i64 },

    /// Payload is not JSON, not an object, or a single record lacks an id.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Request never produced a status (DNS, refused connection, timeout).
    #[error("Request failed: {0}")]
    Connection(#[from] curl::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Blocking fetch task panicked or was cancelled by the runtime.
    #[error("Fetch task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ApiError {
    /// Builds a transport failure, keeping only the first characters of `body`.
    pub fn transport(resource: impl Into<String>, status: u32, body: &str) -> Self {
        ApiError::Transport {
            resource: resource.into(),
            status,
            body: truncate_body(body),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// HTTP status, when the failure came from a response.
    pub fn status(&self) -> Option<u32> {
        match self {
            ApiError::Transport { status, .. } => Some(*status),
            ApiError::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}

/// First [`BODY_PREVIEW_CHARS`] characters of `body` (char boundary safe).
pub fn truncate_body(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_matches_listing_format() {
        let e = ApiError::transport("characters", 502, "bad gateway");
        assert_eq!(
            e.to_string(),
            "Failed to fetch characters. Status: 502. Body: bad gateway"
        );
        assert_eq!(e.status(), Some(502));
    }

    #[test]
    fn transport_body_is_truncated() {
        let body = "x".repeat(250);
        match ApiError::transport("characters", 500, &body) {
            ApiError::Transport { body, .. } => assert_eq!(body.len(), BODY_PREVIEW_CHARS),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn truncate_respects_multibyte_chars() {
        let body = "忍".repeat(150);
        let t = truncate_body(&body);
        assert_eq!(t.chars().count(), BODY_PREVIEW_CHARS);
    }

    #[test]
    fn not_found_message() {
        let e = ApiError::NotFound { id: 9999 };
        assert!(e.is_not_found());
        assert_eq!(e.to_string(), "Character with ID 9999 not found.");
        assert_eq!(e.status(), Some(404));
    }
}
