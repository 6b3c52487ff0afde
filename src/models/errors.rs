//! Centralized Error Handling Module
//!
//! Every failure in the persistence layer flows through [`AppError`]. The
//! error keeps the original cause intact and records which operation failed,
//! on which file, and where in the source the failure was wrapped.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - CFG_xxx: configuration file errors
//! - OBJ_xxx: artifact save/load errors

use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;
use std::path::{Path, PathBuf};

/// Boxed underlying cause
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Operation that failed
    pub code: ErrorCode,
    /// File the operation was working on
    pub path: PathBuf,
    /// Where the failure was wrapped
    pub location: &'static Location<'static>,
    /// Original underlying error
    source: BoxError,
}

impl AppError {
    /// Wrap an underlying error with its execution context.
    ///
    /// The source location recorded is the caller's.
    #[track_caller]
    pub fn wrap(code: ErrorCode, path: impl AsRef<Path>, source: impl Into<BoxError>) -> Self {
        Self {
            code,
            path: path.as_ref().to_path_buf(),
            location: Location::caller(),
            source: source.into(),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    /// The original underlying error
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.source.as_ref()
    }

    /// Downcast the underlying error to a concrete type
    pub fn cause_as<E: StdError + 'static>(&self) -> Option<&E> {
        self.source.downcast_ref::<E>()
    }

    /// True when the underlying cause is an I/O "not found"
    pub fn is_not_found(&self) -> bool {
        self.cause_as::<std::io::Error>()
            .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} '{}' failed at {}:{}: {}",
            self.code.as_str(),
            self.code.operation(),
            self.path.display(),
            self.location.file(),
            self.location.line(),
            self.source
        )
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref() as &(dyn StdError + 'static))
    }
}

/// Execution-context marker: which operation failed.
///
/// Codes name the operation, not the root cause. A missing file and a
/// malformed file read by the same operation share one code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Reading or parsing a YAML configuration file
    ConfigRead,
    /// Writing an artifact to disk
    ObjectSave,
    /// Reading an artifact back from disk
    ObjectLoad,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigRead => "CFG_READ_FAILED",
            Self::ObjectSave => "OBJ_SAVE_FAILED",
            Self::ObjectLoad => "OBJ_LOAD_FAILED",
        }
    }

    /// Name of the operation that raised the error
    pub fn operation(&self) -> &'static str {
        match self {
            Self::ConfigRead => "read_yaml_file",
            Self::ObjectSave => "save_object",
            Self::ObjectLoad => "load_object",
        }
    }
}

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_codes() {
        let err = AppError::wrap(
            ErrorCode::ObjectLoad,
            "artifacts/model.pkl",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.code, ErrorCode::ObjectLoad);
        assert_eq!(err.code_str(), "OBJ_LOAD_FAILED");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_location_is_caller() {
        let err = AppError::wrap(ErrorCode::ConfigRead, "a.yaml", "bad yaml");
        assert!(err.location.file().ends_with("errors.rs"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_source_is_preserved() {
        let err = AppError::wrap(
            ErrorCode::ObjectSave,
            "out.pkl",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let source = err.source().expect("source present");
        assert_eq!(source.to_string(), "denied");
        let io_err = err.cause_as::<io::Error>().expect("io error");
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_display_carries_context() {
        let err = AppError::wrap(ErrorCode::ConfigRead, "config/schema.yaml", "bad indent");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[CFG_READ_FAILED] read_yaml_file 'config/schema.yaml'"));
        assert!(rendered.ends_with("bad indent"));
    }
}
