//! Error handling for the sort utility

use std::io;
use thiserror::Error;

/// Custom error type for tokenize/sort/report runs
#[derive(Error, Debug)]
pub enum SortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Permission denied: {file}")]
    PermissionDenied { file: String },

    #[error("No such file or directory: {file}")]
    FileNotFound { file: String },

    #[error("Is a directory: {file}")]
    IsDirectory { file: String },

    #[error("Input is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    /// Data-type selector given without a recognized value
    #[error("No data type defined!")]
    MissingDataType,

    /// Sorting-type selector given without a recognized value
    #[error("No sorting type defined!")]
    MissingSortingType,
}

impl SortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::PermissionDenied { .. }
            | SortError::FileNotFound { .. }
            | SortError::IsDirectory { .. }
            | SortError::Io(_)
            | SortError::Utf8Error(_) => crate::SORT_FAILURE,

            SortError::MissingDataType | SortError::MissingSortingType => crate::EXIT_FAILURE,
        }
    }

    /// True for errors raised while resolving the command line
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SortError::MissingDataType | SortError::MissingSortingType
        )
    }

    /// Create a permission denied error
    pub fn permission_denied(file: &str) -> Self {
        SortError::PermissionDenied {
            file: file.to_string(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        SortError::FileNotFound {
            file: file.to_string(),
        }
    }

    /// Create an is directory error
    pub fn is_directory(file: &str) -> Self {
        SortError::IsDirectory {
            file: file.to_string(),
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Context trait for adding file context to I/O errors
pub trait SortContext<T> {
    fn with_file_context(self, filename: &str) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_file_context(self, filename: &str) -> SortResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::PermissionDenied => SortError::permission_denied(filename),
            io::ErrorKind::NotFound => SortError::file_not_found(filename),
            _ if std::path::Path::new(filename).is_dir() => SortError::is_directory(filename),
            _ => SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", filename, io_err),
            )),
        })
    }
}
