//! Configuration options for directory conversion

use std::path::PathBuf;

use crate::error::{ConvertError, ConversionResult};

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Directory to scan for source files (non-recursive)
    pub directory: PathBuf,
    /// Suffix identifying source files, e.g. ".pub"
    pub source_suffix: String,
    /// Suffix used for target files, e.g. ".txt"
    pub target_suffix: String,
    /// Abort the run on the first per-file error instead of skipping
    pub fail_fast: bool,
    /// Suppress non-error output
    pub quiet: bool,
    /// Emit verbose diagnostics on stderr
    pub verbose: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            source_suffix: ".pub".to_string(),
            target_suffix: ".txt".to_string(),
            fail_fast: false,
            quiet: false,
            verbose: false,
        }
    }
}

impl ConvertConfig {
    /// Validate the configuration before any filesystem work
    pub fn validate(&self) -> ConversionResult<()> {
        if self.source_suffix.is_empty() {
            return Err(ConvertError::configuration(
                "source suffix must not be empty".to_string(),
            ));
        }
        if self.target_suffix.is_empty() {
            return Err(ConvertError::configuration(
                "target suffix must not be empty".to_string(),
            ));
        }
        // Identical suffixes would make every target overwrite its own source
        if self.source_suffix == self.target_suffix {
            return Err(ConvertError::configuration(format!(
                "source and target suffix are both '{}'",
                self.source_suffix
            )));
        }
        Ok(())
    }

    /// Configuration with a different directory, suffixes left at defaults
    pub fn for_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }
}
