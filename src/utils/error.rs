use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("Malformed request: {message}")]
    MalformedRequest { message: String },

    #[error("Invalid date: {value:?} is not a YYYY-MM-DD calendar date")]
    InvalidDate { value: String },

    #[error("Invalid time: {value:?} is not a 24-hour HH:MM time")]
    InvalidTime { value: String },

    #[error("No receipt found for id {id}")]
    NotFound { id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Client,
    NotFound,
    Configuration,
    System,
}

impl ReceiptError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReceiptError::MalformedRequest { .. }
            | ReceiptError::InvalidDate { .. }
            | ReceiptError::InvalidTime { .. } => ErrorCategory::Client,
            ReceiptError::NotFound { .. } => ErrorCategory::NotFound,
            ReceiptError::ConfigError { .. } | ReceiptError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ReceiptError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.category() {
            ErrorCategory::Client => StatusCode::BAD_REQUEST,
            ErrorCategory::NotFound => StatusCode::NOT_FOUND,
            ErrorCategory::Configuration | ErrorCategory::System => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Short message safe to hand back to a caller or print on the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ReceiptError::MalformedRequest { .. } => {
                "The receipt is invalid. Please verify input.".to_string()
            }
            ReceiptError::InvalidDate { .. } => "Invalid purchase date".to_string(),
            ReceiptError::InvalidTime { .. } => "Invalid purchase time".to_string(),
            ReceiptError::NotFound { .. } => "No receipt found for that ID.".to_string(),
            ReceiptError::IoError(e) => format!("I/O failure: {}", e),
            ReceiptError::ConfigError { .. } | ReceiptError::InvalidConfigValueError { .. } => {
                self.to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Client => "Check the receipt JSON against the documented shape",
            ErrorCategory::NotFound => "Submit the receipt first and use the returned id",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::System => "Check file permissions and that the port is free",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
