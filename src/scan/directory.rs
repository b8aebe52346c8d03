use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, ConversionResult};
use crate::scan::filter::is_source_file;

/// Find source files directly inside `dir`. Subdirectories are never
/// descended into, and entries are kept in whatever order `read_dir`
/// yields them (platform-defined, not sorted).
pub fn find_source_files(dir: &Path, suffix: &str) -> ConversionResult<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).map_err(|e| ConvertError::enumeration(dir.to_path_buf(), e))?;

    let mut source_files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConvertError::enumeration(dir.to_path_buf(), e))?;
        let path = entry.path();
        if is_source_file(&path, suffix) {
            source_files.push(path);
        }
    }

    Ok(source_files)
}
