//! Directory enumeration and source file filtering

pub mod directory;
pub mod filter;

pub use directory::find_source_files;
pub use filter::{has_suffix, is_source_file};
