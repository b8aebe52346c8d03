use std::path::Path;

/// Return true if the entry is a regular file whose name ends with `suffix`.
/// The match is exact and case-sensitive, so `KEY.PUB` does not match `.pub`.
pub fn is_source_file(path: &Path, suffix: &str) -> bool {
    path.is_file() && has_suffix(path, suffix)
}

/// Suffix check on the file name only, ignoring parent directories.
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(suffix) && name.len() > suffix.len())
}
