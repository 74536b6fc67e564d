//! CLI-specific error types

use std::io;

use thiserror::Error;

use crate::codec::CodecError;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("{0}")]
    Config(String),

    /// I/O error (files, stdin/stdout)
    #[error("{0}")]
    Io(String),

    /// Input did not decode or output did not encode
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        match self {
            CliError::Config(_) => "CLI_CONFIG_ERROR",
            CliError::Io(_) => "CLI_IO_ERROR",
            CliError::Codec(_) => "CLI_CODEC_ERROR",
        }
    }

    /// Field path of a decode failure, if any
    pub fn field_path(&self) -> Option<&str> {
        match self {
            CliError::Codec(e) => e.field_path(),
            _ => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::DecodeError;
    use crate::schema::Projection;

    #[test]
    fn test_error_codes() {
        assert_eq!(CliError::config_error("bad").code_str(), "CLI_CONFIG_ERROR");
        assert_eq!(CliError::io_error("closed").code_str(), "CLI_IO_ERROR");
    }

    #[test]
    fn test_codec_error_keeps_path() {
        let err: CliError = CodecError::Decode {
            record: "League",
            projection: Projection::Wire,
            source: DecodeError::new("standings[0].rank", "int", "string"),
        }
        .into();

        assert_eq!(err.code_str(), "CLI_CODEC_ERROR");
        assert_eq!(err.field_path(), Some("standings[0].rank"));
        assert!(err.to_string().contains("standings[0].rank"));
    }

    #[test]
    fn test_from_io_error() {
        let err: CliError = io::Error::new(io::ErrorKind::NotFound, "missing input").into();
        assert_eq!(err.code_str(), "CLI_IO_ERROR");
        assert!(err.to_string().contains("missing input"));
    }
}
