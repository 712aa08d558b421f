use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Check '{check}' failed: {reason}")]
    CheckFailed { check: String, reason: String },

    #[error("Check '{check}' got HTTP {status}: {body}")]
    UnexpectedStatus {
        check: String,
        status: u16,
        body: String,
    },
}

impl SmokeError {
    /// Process exit code: 2 for configuration problems, 1 for anything that
    /// happens once requests start flowing.
    pub fn exit_code(&self) -> i32 {
        match self {
            SmokeError::ConfigError { .. } | SmokeError::UrlError(_) => 2,
            _ => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SmokeError::ApiError(e) => {
                format!("Could not reach the meal_max service: {}", e)
            }
            SmokeError::SerializationError(e) => {
                format!("The service returned a body that could not be processed: {}", e)
            }
            SmokeError::IoError(e) => format!("File operation failed: {}", e),
            SmokeError::UrlError(e) => format!("The configured base URL is invalid: {}", e),
            SmokeError::ConfigError { field, message } => {
                format!("Configuration problem ({}): {}", field, message)
            }
            SmokeError::CheckFailed { check, reason } => {
                format!("Smoke check '{}' failed: {}", check, reason)
            }
            SmokeError::UnexpectedStatus {
                check,
                status,
                body,
            } => {
                format!(
                    "Smoke check '{}' got unexpected HTTP {} with body: {}",
                    check, status, body
                )
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SmokeError::ApiError(_) => {
                "Check that the meal_max service is running and that --base-url points at it"
                    .to_string()
            }
            SmokeError::SerializationError(_) => {
                "Inspect the raw response; the endpoint may not be returning JSON".to_string()
            }
            SmokeError::IoError(_) => "Check file paths and permissions".to_string(),
            SmokeError::UrlError(_) | SmokeError::ConfigError { .. } => {
                "Fix the configuration value and re-run".to_string()
            }
            SmokeError::CheckFailed { .. } | SmokeError::UnexpectedStatus { .. } => {
                "Inspect the service logs for the failing endpoint".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SmokeError>;
