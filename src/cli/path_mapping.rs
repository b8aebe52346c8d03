use std::path::{Path, PathBuf};

/// Map a source file into its target file path: strip the source suffix
/// from the file name, append the target suffix, keep the same directory.
///
/// The caller guarantees the file name ends with `source_suffix`; a name
/// that does not is returned unchanged apart from the appended suffix.
pub fn map_source_to_target(source: &Path, source_suffix: &str, target_suffix: &str) -> PathBuf {
    let name = source
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let base = name.strip_suffix(source_suffix).unwrap_or(name);
    source.with_file_name(format!("{}{}", base, target_suffix))
}
