use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Lets scripts tell argument mistakes apart from failures while
/// loading or analysing a BoM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Query completed and output was written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing file, malformed table, cycle, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-level errors raised by adapters and the CLI.
///
/// Domain failures (cycles, malformed rows, bad quantities) are `BomError`;
/// these cover the files around them.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("BoM file not found: {path}\n\n💡 Hint: {suggestion}")]
    BomFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse CSV file: {path}\nDetails: {details}\n\n💡 Hint: Expected a header row followed by comma-separated records")]
    CsvParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("The {format} format cannot render a {query} result\n\n💡 Hint: {hint}")]
    UnsupportedFormat {
        format: String,
        query: String,
        hint: String,
    },

    #[error("Missing input: {what}\n\n💡 Hint: {hint}")]
    MissingInput { what: String, hint: String },
}
