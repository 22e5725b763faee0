use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("Upstream request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatusError { status: u16, body: String },

    #[error("Upstream returned an empty response body")]
    EmptyResponseError,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid {field}: {reason}")]
    InputError { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, AddressError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Upstream,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AddressError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AddressError::RequestError(_) => ErrorCategory::Network,
            AddressError::UpstreamStatusError { .. } | AddressError::EmptyResponseError => {
                ErrorCategory::Upstream
            }
            AddressError::SerializationError(_) | AddressError::IoError(_) => ErrorCategory::Data,
            AddressError::ConfigError { .. }
            | AddressError::ConfigValidationError { .. }
            | AddressError::InvalidConfigValueError { .. }
            | AddressError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AddressError::InputError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 上游暫時性問題，可稍後重試
            ErrorCategory::Network | ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AddressError::RequestError(e) if e.is_timeout() => {
                "The address lookup service did not respond in time".to_string()
            }
            AddressError::RequestError(_) => {
                "Could not reach the address lookup service".to_string()
            }
            AddressError::UpstreamStatusError { status, .. } => {
                format!("The address lookup service responded with status {}", status)
            }
            AddressError::EmptyResponseError => {
                "The address lookup service returned no data".to_string()
            }
            AddressError::SerializationError(_) => {
                "The address lookup service returned data in an unexpected format".to_string()
            }
            AddressError::InputError { field, reason } => format!("Invalid {}: {}", field, reason),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check network connectivity and the configured API URL",
            ErrorCategory::Upstream => {
                "Verify the API token is valid and the upstream service is healthy, then retry"
            }
            ErrorCategory::Data => "Inspect the upstream response; its format may have changed",
            ErrorCategory::Configuration => {
                "Review the configuration file and AUSTRALIA_POST_API_* environment variables"
            }
            ErrorCategory::Input => "Correct the postcode, suburb or state and try again",
        }
    }
}

/// Machine-readable code carried by a [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ServiceErrorCode {
    #[serde(rename = "SERVICE_UNAVAILABLE")]
    ServiceUnavailable,
}

impl ServiceErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }
}

impl fmt::Display for ServiceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation could not be performed at all.
///
/// Kept apart from an invalid address, which is an ordinary
/// [`ValidationResult`](crate::domain::model::ValidationResult).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} ({code}): {original_error}")]
pub struct ServiceError {
    pub code: ServiceErrorCode,
    pub message: String,
    pub original_error: String,
}

impl ServiceError {
    pub const UNAVAILABLE_MESSAGE: &'static str = "Address validation service unavailable";
    pub const SEARCH_UNAVAILABLE_MESSAGE: &'static str = "Locality search service unavailable";

    pub fn unavailable(cause: &AddressError) -> Self {
        Self::service_unavailable(Self::UNAVAILABLE_MESSAGE, cause)
    }

    pub fn search_unavailable(cause: &AddressError) -> Self {
        Self::service_unavailable(Self::SEARCH_UNAVAILABLE_MESSAGE, cause)
    }

    fn service_unavailable(message: &str, cause: &AddressError) -> Self {
        Self {
            code: ServiceErrorCode::ServiceUnavailable,
            message: message.to_string(),
            original_error: cause.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_preserves_cause() {
        let cause = AddressError::UpstreamStatusError {
            status: 503,
            body: "maintenance".to_string(),
        };
        let err = ServiceError::unavailable(&cause);

        assert_eq!(err.code, ServiceErrorCode::ServiceUnavailable);
        assert_eq!(err.code.to_string(), "SERVICE_UNAVAILABLE");
        assert_eq!(err.message, "Address validation service unavailable");
        assert_eq!(err.original_error, "Upstream returned status 503: maintenance");
    }

    #[test]
    fn test_service_error_code_serializes_as_constant() {
        let json = serde_json::to_string(&ServiceErrorCode::ServiceUnavailable).unwrap();
        assert_eq!(json, "\"SERVICE_UNAVAILABLE\"");
    }

    #[test]
    fn test_error_classification() {
        let upstream = AddressError::EmptyResponseError;
        assert_eq!(upstream.category(), ErrorCategory::Upstream);
        assert_eq!(upstream.severity(), ErrorSeverity::Medium);

        let config = AddressError::MissingConfigError {
            field: "upstream.auth_token".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.severity(), ErrorSeverity::Critical);

        let input = AddressError::InputError {
            field: "postcode".to_string(),
            reason: "must be exactly 4 digits".to_string(),
        };
        assert_eq!(input.severity(), ErrorSeverity::High);
        assert_eq!(input.user_friendly_message(), "Invalid postcode: must be exactly 4 digits");
    }

    #[test]
    fn test_search_unavailable_keeps_code() {
        let err = ServiceError::search_unavailable(&AddressError::EmptyResponseError);

        assert_eq!(err.code, ServiceErrorCode::ServiceUnavailable);
        assert_eq!(err.message, "Locality search service unavailable");
        assert_eq!(err.original_error, "Upstream returned an empty response body");
    }
}
