use std::collections::HashMap;

use thiserror::Error;

/// Normalized error raised by every API operation.
///
/// The backend reports failures as `{ message, status, errors? }`; failures
/// that happen before a response exists (DNS, refused connection, expired
/// deadline) carry status `0` so callers can distinguish "could not reach the
/// server" from "the server said no" by status alone.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message} (status {status})")]
    Api {
        status: u16,
        message: String,
        /// Per-field validation messages, when the server provides them.
        errors: Option<HashMap<String, Vec<String>>>,
    },

    /// The request never reached the server or no response came back.
    #[error("connection error: {0}")]
    Connection(String),

    /// The configured deadline expired before a response arrived.
    #[error("timeout: {0}")]
    Timeout(String),

    /// The response body was not valid JSON, or did not match the expected
    /// shape.
    #[error("invalid response body: {0}")]
    Parse(String),

    /// The client or a request could not be constructed.
    #[error("client build error: {0}")]
    Build(String),
}

impl ApiError {
    /// HTTP status behind this error; `0` when no response was received.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Api { status, .. } => *status,
            ApiError::Connection(_)
            | ApiError::Timeout(_)
            | ApiError::Parse(_)
            | ApiError::Build(_) => 0,
        }
    }

    /// Field-level validation messages, when the server returned any.
    pub fn field_errors(&self) -> Option<&HashMap<String, Vec<String>>> {
        match self {
            ApiError::Api { errors, .. } => errors.as_ref(),
            _ => None,
        }
    }

    /// True when the failure happened before a response was received.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Connection(_) | ApiError::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_reports_server_status() {
        let err = ApiError::Api {
            status: 422,
            message: "validation failed".to_string(),
            errors: Some(HashMap::from([(
                "email".to_string(),
                vec!["must be unique".to_string()],
            )])),
        };
        assert_eq!(err.status(), 422);
        assert_eq!(
            err.field_errors().unwrap()["email"],
            vec!["must be unique".to_string()]
        );
        assert!(!err.is_connectivity());
    }

    #[test]
    fn pre_response_failures_report_status_zero() {
        let conn = ApiError::Connection("refused".to_string());
        let timeout = ApiError::Timeout("deadline".to_string());
        assert_eq!(conn.status(), 0);
        assert_eq!(timeout.status(), 0);
        assert!(conn.is_connectivity());
        assert!(timeout.is_connectivity());
        assert!(conn.field_errors().is_none());
    }

    #[test]
    fn display_includes_message_and_status() {
        let err = ApiError::Api {
            status: 404,
            message: "feedback not found".to_string(),
            errors: None,
        };
        assert_eq!(err.to_string(), "feedback not found (status 404)");
    }
}
