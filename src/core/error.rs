//! Error type for scan and rewrite operations.
//!
//! An error is a stable dotted code plus a human-readable message. This
//! is an interactive operator tool, so messages are printed straight to
//! the console and never serialized.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ScanRootMissing,
    ScanRootNotDirectory,

    ValidationInvalidPattern,

    InternalIoError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ScanRootMissing => "scan.root_missing",
            ErrorCode::ScanRootNotDirectory => "scan.root_not_directory",

            ErrorCode::ValidationInvalidPattern => "validation.invalid_pattern",

            ErrorCode::InternalIoError => "internal.io_error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    /// Operation or path the error occurred in, when known.
    pub context: Option<String>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Error {
            code,
            message: message.into(),
            context: None,
        }
    }

    pub fn scan_root_missing(path: impl Into<String>) -> Self {
        Error::new(
            ErrorCode::ScanRootMissing,
            format!("Directory '{}' does not exist", path.into()),
        )
    }

    pub fn scan_root_not_directory(path: impl Into<String>) -> Self {
        Error::new(
            ErrorCode::ScanRootNotDirectory,
            format!("'{}' is not a directory", path.into()),
        )
    }

    pub fn validation_invalid_pattern(pattern: impl Into<String>, cause: impl Into<String>) -> Self {
        let pattern = pattern.into();
        Error {
            code: ErrorCode::ValidationInvalidPattern,
            message: format!("Invalid pattern '{}': {}", pattern, cause.into()),
            context: Some(pattern),
        }
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        Error {
            code: ErrorCode::InternalIoError,
            message: error.into(),
            context,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.context {
            Some(context) => write!(f, "{} ({})", self.message, context),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_dotted_strings() {
        assert_eq!(ErrorCode::ScanRootMissing.as_str(), "scan.root_missing");
        assert_eq!(ErrorCode::InternalIoError.as_str(), "internal.io_error");
    }

    #[test]
    fn display_includes_context_when_present() {
        let err = Error::internal_io("permission denied", Some("read a.html".to_string()));
        assert_eq!(err.to_string(), "permission denied (read a.html)");
    }

    #[test]
    fn display_is_message_without_context() {
        let err = Error::scan_root_missing("texts");
        assert_eq!(err.to_string(), "Directory 'texts' does not exist");
    }
}
