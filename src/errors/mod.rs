use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::review_phase::ReviewPhase;

#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum ReviewError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Network/API errors
    #[error("Network error during {operation}: {reason}")]
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },
    #[error("{message}")]
    ApiError {
        endpoint: String,
        status_code: Option<u16>,
        message: String,
    },

    // Parser errors
    #[error("Parse error in {content_type}: {reason}")]
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // Review workflow errors
    #[error("Cannot {action} while the review is {phase}")]
    InvalidTransition {
        phase: ReviewPhase,
        action: String,
    },
    #[error("Review board '{id}' not found")]
    SessionNotFound {
        id: String,
    },

    // Validation errors
    #[error("Validation error for field '{field}': value '{value}' violates constraint '{constraint}'")]
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl ReviewError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn api_error(endpoint: &str, status_code: Option<u16>, message: &str) -> Self {
        Self::ApiError {
            endpoint: endpoint.to_string(),
            status_code,
            message: message.to_string(),
        }
    }

    pub fn invalid_transition(phase: ReviewPhase, action: &str) -> Self {
        Self::InvalidTransition {
            phase,
            action: action.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. } => true,
            Self::ApiError { .. } => true,
            Self::ValidationError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::InvalidTransition { .. } => true,
            Self::SessionNotFound { .. }
            | Self::SystemError { .. }
            | Self::ConfigurationFileError { .. }
            | Self::ParseError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::ApiError { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::SessionNotFound { .. } => ErrorSeverity::Medium,
            Self::InvalidTransition { .. } => ErrorSeverity::Low,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let location = field.as_deref().map(|f| format!(" [{}]", f)).unwrap_or_default();
                with_hint(format!("Config problem{}: {}", location, message), suggestion.as_deref())
            }
            Self::NetworkError { url, status_code, reason, .. } => {
                let target = url.as_deref().unwrap_or("the cost API");
                let status = status_code.map(|code| format!(" (HTTP {})", code)).unwrap_or_default();
                with_hint(
                    format!("Could not talk to {}{}: {}", target, status, reason),
                    Some("Is the backend running? Check api.base_url or pass --url"),
                )
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                with_hint(format!("Invalid {} '{}': expected {}", field, value, constraint), suggestion.as_deref())
            }
            // The API message is shown verbatim.
            Self::ApiError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

fn with_hint(message: String, hint: Option<&str>) -> String {
    match hint {
        Some(hint) => format!("{}\n💡 {}", message, hint),
        None => message,
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for finops-review operations
pub type ReviewResult<T> = Result<T, ReviewError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message
    pub fn handle_error(error: &ReviewError) {
        let severity = error.severity();

        log::debug!("{} error details: {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 Running the command again may succeed");
        }
    }
}

impl From<std::io::Error> for ReviewError {
    fn from(error: std::io::Error) -> Self {
        Self::system_error(&format!("I/O ({:?})", error.kind()), &error.to_string())
    }
}

impl From<serde_json::Error> for ReviewError {
    fn from(error: serde_json::Error) -> Self {
        ReviewError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for ReviewError {
    fn from(error: toml::de::Error) -> Self {
        ReviewError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for ReviewError {
    fn from(error: reqwest::Error) -> Self {
        let operation = if error.is_timeout() { "request (timed out)" } else { "request" };
        Self::NetworkError {
            operation: operation.to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
