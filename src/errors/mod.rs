//! # Error Handling
//!
//! Error type shared by the SOAR client, configuration loading and start-up.
//! Tool-level failures never surface as this type: the action invoker folds
//! them into the uniform `{Status, Message}` result instead.

/// Custom result type for SOAR MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the SOAR MCP server
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request never produced a response (connect, timeout, TLS, ...)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("HTTP error: {message} (status: {status})")]
    Http { status: u16, message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {context}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        context: String,
    },
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create an HTTP status error
    pub fn http<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Http { status, message: message.into() }
    }

    /// Create a serialization error with context
    pub fn serialization<S: Into<String>>(source: serde_json::Error, context: S) -> Self {
        Self::Serialization { source, context: context.into() }
    }

    /// HTTP status code carried by the error, if the backend answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error, "JSON processing failed")
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .iter()
            .map(|(field, field_errors)| {
                let error_messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| {
                        e.message.as_ref().map_or("Invalid value".to_string(), |m| m.to_string())
                    })
                    .collect();
                format!("{}: {}", field, error_messages.join(", "))
            })
            .collect::<Vec<_>>()
            .join("; ");

        Self::validation(format!("Validation failed: {}", message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::config("missing SOAR_URL").to_string(), "Configuration error: missing SOAR_URL");
        assert_eq!(
            Error::http(502, "bad gateway").to_string(),
            "HTTP error: bad gateway (status: 502)"
        );
    }

    #[test]
    fn test_status_code() {
        assert_eq!(Error::http(404, "not found").status_code(), Some(404));
        assert_eq!(Error::config("x").status_code(), None);
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Serialization { .. }));
        assert!(error.to_string().contains("JSON processing failed"));
    }
}
