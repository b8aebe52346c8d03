//! pub2txt
//!
//! A Rust CLI tool that scans a single directory for files ending in a
//! source suffix (default `.pub`) and copies each one byte-for-byte into a
//! sibling file with the same base name and a target suffix (default `.txt`).

// Allow dead code for library exports that may not be used by the binary yet
#![allow(dead_code)]

pub mod cli;
pub mod conversion;
pub mod error;
pub mod scan;

// Re-export commonly used types
pub use conversion::{convert_directory, ConversionSummary, ConvertConfig};
pub use error::{ConvertError, ConversionResult};

/// Convert a directory with the default `.pub` -> `.txt` suffix pair
pub fn convert(directory: impl Into<std::path::PathBuf>) -> ConversionResult<ConversionSummary> {
    let config = ConvertConfig::for_directory(directory);
    convert_directory(&config)
}
