//! Error types for roster operations.

use thiserror::Error;

/// Errors that can occur while fetching, comparing, or reporting rosters.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Configuration is missing or incomplete.
    #[error("configuration required: {0}")]
    ConfigMissing(String),

    /// District token exchange failed.
    #[error("Clever authentication failed: {message}")]
    Auth {
        message: String,
        status_code: Option<u16>,
    },

    /// A list request came back with a non-success status.
    #[error(
        "HTTP {status} error for Clever request /{endpoint}{}",
        cursor_suffix(.cursor)
    )]
    Status {
        endpoint: String,
        status: u16,
        cursor: Option<String>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Report template could not be rendered.
    #[error("Failed to render report: {0}")]
    Template(#[from] tera::Error),

    /// Report mail could not be built or sent.
    #[error("Mail delivery failed: {0}")]
    Mail(String),

    /// District ID that cannot name a report file.
    #[error("district ID {0:?} cannot be used as a report file name")]
    InvalidDistrictId(String),

    /// Local file I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn cursor_suffix(cursor: &Option<String>) -> String {
    match cursor {
        Some(c) => format!(" starting after {c}"),
        None => String::new(),
    }
}

/// Result type alias for roster operations.
pub type Result<T> = core::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_names_endpoint_and_cursor() {
        let err = RosterError::Status {
            endpoint: "students".to_string(),
            status: 502,
            cursor: Some("abc123".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 502 error for Clever request /students starting after abc123"
        );
    }

    #[test]
    fn test_status_error_without_cursor() {
        let err = RosterError::Status {
            endpoint: "districts".to_string(),
            status: 404,
            cursor: None,
        };
        assert_eq!(err.to_string(), "HTTP 404 error for Clever request /districts");
    }
}
