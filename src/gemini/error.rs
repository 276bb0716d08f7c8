use thiserror::Error;

/// Errors from the Gemini `generateContent` boundary.
///
/// `Parse` is distinct from transport failures: the request succeeded but
/// the model's output did not match the expected JSON shape.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// The server returned HTTP 429. `retry_after_ms` comes from the
    /// Retry-After header when present.
    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    /// Any other HTTP error status, with the response body as the message.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Underlying network failure (DNS, refused connection, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response arrived but could not be parsed into the expected shape.
    #[error("failed to parse model response: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_display() {
        let err = GeminiError::RateLimited {
            retry_after_ms: 5000,
        };
        assert_eq!(err.to_string(), "rate limited, retry after 5000ms");
    }

    #[test]
    fn api_error_display() {
        let err = GeminiError::Api {
            status: 403,
            message: "API key not valid".into(),
        };
        assert_eq!(err.to_string(), "API error (status 403): API key not valid");
    }

    #[test]
    fn parse_error_display() {
        let err = GeminiError::Parse("expected a JSON array".into());
        assert_eq!(
            err.to_string(),
            "failed to parse model response: expected a JSON array"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeminiError>();
    }
}
