//! Error types for the CSSF compiler

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CssfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in class '{class_name}': {message}")]
    Parse { class_name: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    #[error("Watch error: {message}")]
    Watch { message: String },
}

pub type Result<T> = std::result::Result<T, CssfError>;

impl CssfError {
    pub fn parse(class_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            class_name: class_name.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn watch(message: impl Into<String>) -> Self {
        Self::Watch {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_class() {
        let err = CssfError::parse("cssf--broken", "missing value");
        assert_eq!(
            err.to_string(),
            "Parse error in class 'cssf--broken': missing value"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CssfError = io.into();
        assert!(matches!(err, CssfError::Io(_)));
    }
}
