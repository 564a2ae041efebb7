use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit status of `license-builder`
///
/// Scripts can tell a search without hits apart from a real failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    /// `search` ran but no license file contained the term
    NoMatches = 1,
    /// Rejected by the argument parser
    InvalidArguments = 2,
    /// Anything that failed after the arguments were accepted
    ApplicationError = 3,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meaning = match self {
            ExitCode::Success => "success",
            ExitCode::NoMatches => "no license file matched",
            ExitCode::InvalidArguments => "invalid arguments",
            ExitCode::ApplicationError => "application error",
        };
        write!(f, "{} ({})", meaning, self.as_i32())
    }
}

/// Errors raised while editing, writing, loading or searching licenses
///
/// User-facing variants end with a `💡 Hint:` line. A failed operation
/// never reaches the state repository, so the saved state is unchanged.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Missing folder, empty search term, empty license file
    #[error("Invalid input: {message}\n\n💡 Hint: {hint}")]
    InvalidInput { message: String, hint: String },

    #[error("Product not found: {id}\n\n💡 Hint: Run `license-builder list` to see the ids of the current products")]
    ProductNotFound { id: String },

    /// Rejected model edit, e.g. zero seats or a malformed `YYYY.MM`
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Check that the license file exists and is readable")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Check that the destination folder exists and is writable")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read directory: {path}\nDetails: {details}\n\n💡 Hint: Check that the folder exists and is readable")]
    DirectoryReadError { path: PathBuf, details: String },

    #[error("Failed to load saved state: {path}\nDetails: {details}\n\n💡 Hint: Fix or delete the state file, or run `license-builder clear`")]
    StateLoadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
