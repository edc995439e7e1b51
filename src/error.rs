use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
}

/// The single error shape the request engine is allowed to surface.
///
/// Every failure path — connection failure, per-attempt timeout, non-2xx
/// response, undecodable body — ends up here, so callers can rely on
/// `status()` / `message()` / `details()` regardless of the cause.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request timeout")]
    Timeout { endpoint: String },
    #[error("HTTP error: {status} {message}")]
    Http {
        status: u16,
        message: String,
        errors: Vec<String>,
    },
    #[error("{message}")]
    Network { message: String },
    #[error("Max retries exceeded")]
    RetriesExhausted,
}

impl ApiError {
    /// Numeric status: the HTTP status when one was received, 408 for a
    /// client-side timeout, 0 for everything that never got a response.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Timeout { .. } => 408,
            ApiError::Http { status, .. } => *status,
            ApiError::Network { .. } => 0,
            ApiError::RetriesExhausted => 0,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::Timeout { .. } => "Request timeout".to_string(),
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Network { message } => message.clone(),
            ApiError::RetriesExhausted => "Max retries exceeded".to_string(),
        }
    }

    /// Detail messages decoded from the server's error body, if any.
    pub fn details(&self) -> &[String] {
        match self {
            ApiError::Http { errors, .. } => errors,
            _ => &[],
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
    #[error("Configuration parse error: {message}")]
    ParseError { message: String },
    #[error("Configuration save failed: {message}")]
    SaveFailed { message: String },
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration directory not found")]
    DirNotFound,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Keyring error: {0}")]
    KeyringError(String),
    #[error("Token store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_mapping() {
        let err = ApiError::Timeout {
            endpoint: "/projects".to_string(),
        };
        assert_eq!(err.status(), 408);
        assert_eq!(err.message(), "Request timeout");

        let err = ApiError::Http {
            status: 409,
            message: "Email taken".to_string(),
            errors: vec!["email already in use".to_string()],
        };
        assert_eq!(err.status(), 409);
        assert_eq!(err.message(), "Email taken");
        assert_eq!(err.details(), ["email already in use".to_string()]);

        let err = ApiError::Network {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.status(), 0);
        assert_eq!(err.message(), "connection refused");
        assert!(err.details().is_empty());

        let err = ApiError::RetriesExhausted;
        assert_eq!(err.status(), 0);
        assert_eq!(err.message(), "Max retries exceeded");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Http {
            status: 500,
            message: "Internal error".to_string(),
            errors: vec![],
        };
        assert_eq!(format!("{}", err), "HTTP error: 500 Internal error");

        let err = ApiError::Timeout {
            endpoint: "/slow".to_string(),
        };
        assert_eq!(format!("{}", err), "Request timeout");
    }

    #[test]
    fn test_app_error_from_api_error() {
        let app_err: AppError = ApiError::RetriesExhausted.into();
        assert!(matches!(app_err, AppError::Api(_)));
        assert_eq!(format!("{}", app_err), "ApiError: Max retries exceeded");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::ParseError {
            message: "expected table".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Configuration parse error: expected table"
        );
    }
}
