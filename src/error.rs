use thiserror::Error;

/// Application-wide error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected HTTP status {0}")]
    Http(u16),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(AppError::Http(404).to_string(), "Unexpected HTTP status 404");
        assert_eq!(
            AppError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<Vec<String>>("{not json").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Decode(_)));
    }
}
