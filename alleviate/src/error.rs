use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlleviateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<AlleviateError>),
}

impl AlleviateError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        AlleviateError::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            AlleviateError::Io(e) => format!("I/O operation failed: {}", e),
            AlleviateError::Json(e) => format!("Failed to encode report as JSON: {}", e),
            AlleviateError::Config(e) => format!("Invalid configuration file: {}", e),
            AlleviateError::InvalidSetting(msg) => format!("Invalid setting: {}", msg),
            AlleviateError::WithContext(ctx, err) => format!("{}: {}", ctx, err.user_message()),
        }
    }
}

pub type Result<T> = result::Result<T, AlleviateError>;

// Helper trait for adding context to results
pub trait ResultExt<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for result::Result<T, E>
where
    E: Into<AlleviateError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let alleviate_err: AlleviateError = err.into();
            alleviate_err.with_context(context())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_prefixed_in_user_message() {
        let err = AlleviateError::InvalidSetting("cutoff must be within 0.0..=1.0".to_string())
            .with_context("Failed to load settings");

        assert_eq!(
            err.user_message(),
            "Failed to load settings: Invalid setting: cutoff must be within 0.0..=1.0"
        );
    }

    #[test]
    fn test_every_variant_has_a_user_message() {
        let config = toml::from_str::<toml::Value>("cutoff = ").unwrap_err();
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

        assert!(AlleviateError::from(config).user_message().starts_with("Invalid configuration file"));
        assert!(AlleviateError::from(json).user_message().starts_with("Failed to encode report as JSON"));
        assert_eq!(
            AlleviateError::InvalidSetting("limit".to_string()).user_message(),
            "Invalid setting: limit"
        );
    }

    #[test]
    fn test_result_ext_wraps_io_errors() {
        let result: result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk on fire",
        ));

        let err = result.with_context(|| "Scanning /tmp").unwrap_err();
        assert!(matches!(err, AlleviateError::WithContext(_, _)));
        assert!(err.user_message().starts_with("Scanning /tmp: I/O operation failed"));
    }
}
