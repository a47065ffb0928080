use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid version: {0}")]
    InvalidVersion(#[from] semver::Error),

    #[error("Negative value for {field}: {value}")]
    NegativeValue { field: String, value: String },

    #[error("Invalid number: {value}")]
    InvalidNumber { value: String },

    #[error("Invalid argument {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Bookmark store error: {message}")]
    StoreError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for the CLI.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl HelperError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HelperError::NegativeValue { .. }
            | HelperError::InvalidNumber { .. }
            | HelperError::InvalidArgument { .. }
            | HelperError::InvalidTimestamp { .. }
            | HelperError::InvalidVersion(_) => ErrorCategory::Input,
            HelperError::ConfigValidationError { .. }
            | HelperError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            HelperError::IoError(_) | HelperError::StoreError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => match self {
                HelperError::StoreError { .. } => ErrorSeverity::Medium,
                _ => ErrorSeverity::Critical,
            },
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            HelperError::NegativeValue { field, .. } => {
                format!("Pass a non-negative value for {}", field)
            }
            HelperError::InvalidNumber { .. } => "Pass a whole number".to_string(),
            HelperError::InvalidArgument { field, .. } => {
                format!("Check the value passed for {}", field)
            }
            HelperError::InvalidTimestamp { .. } => {
                "Use an RFC 3339 timestamp with an offset, e.g. 2024-01-02T03:04:05Z".to_string()
            }
            HelperError::InvalidVersion(_) => {
                "Use semantic versions such as 1.2.3".to_string()
            }
            HelperError::ConfigValidationError { field, .. }
            | HelperError::InvalidConfigValueError { field, .. } => {
                format!("Fix '{}' in the configuration file", field)
            }
            HelperError::IoError(_) => "Check that the file exists and is readable".to_string(),
            HelperError::StoreError { .. } => {
                "Retry once the bookmark store is reachable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, HelperError>;
