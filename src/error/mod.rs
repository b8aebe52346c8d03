//! Error types and handling infrastructure for directory conversion

use std::path::PathBuf;

/// Core error types for the conversion process
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The directory itself could not be listed. Fatal for the whole run.
    #[error("cannot list directory {path}: {source}")]
    Enumeration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single source file could not be read. Local to that file.
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single target file could not be created or written. Local to that file.
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {message}")]
    Configuration { message: String },
}

impl ConvertError {
    pub fn enumeration(path: PathBuf, source: std::io::Error) -> Self {
        Self::Enumeration { path, source }
    }

    pub fn read(path: PathBuf, source: std::io::Error) -> Self {
        Self::Read { path, source }
    }

    pub fn write(path: PathBuf, source: std::io::Error) -> Self {
        Self::Write { path, source }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    /// True when the error affects a single file rather than the whole run.
    /// Per-file errors are skipped (and counted) unless fail-fast is set.
    pub fn is_per_file(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Write { .. })
    }

    /// The file the error relates to, when there is one.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Enumeration { path, .. }
            | Self::Read { path, .. }
            | Self::Write { path, .. } => Some(path),
            Self::Configuration { .. } => None,
        }
    }

    /// Create a user-friendly error message for console reporting
    pub fn user_message(&self) -> String {
        match self {
            Self::Enumeration { path, source } => {
                format!("failed to list '{}': {}", path.display(), source)
            }
            Self::Read { path, source } => {
                format!("failed to read '{}': {}", path.display(), source)
            }
            Self::Write { path, source } => {
                format!("failed to write '{}': {}", path.display(), source)
            }
            Self::Configuration { message } => {
                format!("invalid configuration: {}", message)
            }
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConvertError>;
