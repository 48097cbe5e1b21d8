use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl SimError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SimError::HttpClient(_) => {
                "Check the TLS setup and the base URL of the simulation service"
            }
            SimError::Csv(_) => {
                "Make sure the input has the columns valor_imovel, percentual_entrada, anos_contrato"
            }
            SimError::Io(_) => {
                "Check that the file exists and that you have permission to access it"
            }
            SimError::Serialization(_) => "Report this as a bug; the output could not be encoded",
            SimError::Config { .. } => "Check the syntax of the TOML configuration file",
            SimError::InvalidConfigValue { .. } => {
                "Fix the value in the configuration file or override it on the command line"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SimError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            SimError::Config { message } => format!("Could not load configuration: {}", message),
            SimError::Io(e) => format!("File access failed: {}", e),
            SimError::Csv(e) => format!("Could not read the scenario file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

/// Classified failure of one exchange with the simulation service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Request timed out. Check your connection and try again.")]
    Timeout,

    #[error("Connection error. Check that the simulation service is running and reachable.")]
    ConnectionFailure,

    #[error("{0}")]
    ServerError(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl ApiError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Timeout | ApiError::ConnectionFailure)
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ApiError::Timeout => "Try again in a moment, or raise --timeout-secs",
            ApiError::ConnectionFailure => "Start the simulation service or check --base-url",
            ApiError::ServerError(_) => "Review the submitted values",
            ApiError::Unknown(_) => "Run again with --verbose for details",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::ConnectionFailure
        } else if err.is_decode() {
            ApiError::Unknown(format!("Invalid response from simulation service: {}", err))
        } else {
            ApiError::Unknown(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_is_specific() {
        let message = ApiError::Timeout.to_string();
        assert!(message.contains("timed out"));
        assert!(!message.contains("Unexpected"));
    }

    #[test]
    fn test_server_error_is_verbatim() {
        let err = ApiError::ServerError("Percentual inválido".to_string());
        assert_eq!(err.to_string(), "Percentual inválido");
    }

    #[test]
    fn test_retryable_classes() {
        assert!(ApiError::Timeout.is_retryable());
        assert!(ApiError::ConnectionFailure.is_retryable());
        assert!(!ApiError::ServerError("x".into()).is_retryable());
        assert!(!ApiError::Unknown("x".into()).is_retryable());
    }

    #[test]
    fn test_invalid_config_value_message() {
        let err = SimError::InvalidConfigValue {
            field: "api.timeout_seconds".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert!(err.user_friendly_message().contains("api.timeout_seconds"));
    }
}
