//! Core conversion: copy every matching source file to its target file

use std::fs;
use std::path::Path;
use std::time::Instant;

pub mod config;
pub mod summary;

pub use config::ConvertConfig;
pub use summary::ConversionSummary;

use crate::cli::path_mapping::map_source_to_target;
use crate::error::{ConvertError, ConversionResult};
use crate::scan;

/// Convert every source file directly inside `config.directory`.
///
/// Each file is fully read and fully written before the next one is
/// considered. Per-file failures are reported on stderr and skipped
/// (collected into the summary) unless `fail_fast` is set, in which case
/// the first failure aborts the run. Enumeration failure is always fatal.
pub fn convert_directory(config: &ConvertConfig) -> ConversionResult<ConversionSummary> {
    config.validate()?;

    let started = Instant::now();
    let source_files = scan::find_source_files(&config.directory, &config.source_suffix)?;

    if config.verbose {
        eprintln!(
            "scanning '{}': {} file(s) match '{}'",
            config.directory.display(),
            source_files.len(),
            config.source_suffix
        );
    }

    let mut summary = ConversionSummary::new();

    for source in &source_files {
        let target = map_source_to_target(source, &config.source_suffix, &config.target_suffix);

        match copy_file(source, &target) {
            Ok(bytes) => {
                summary.record_converted(bytes);
                if !config.quiet {
                    println!("{} → {}", file_name(source), file_name(&target));
                }
            }
            Err(e) => {
                eprintln!("✗ {}", e.user_message());
                if config.fail_fast {
                    return Err(e);
                }
                summary.record_failed(source.clone(), e.user_message());
            }
        }
    }

    if !config.quiet {
        println!("Done.");
    }

    summary.finish(started.elapsed());
    Ok(summary)
}

/// Copy `source` into `target` byte-for-byte, truncating any existing
/// target. Returns the number of bytes copied.
pub fn copy_file(source: &Path, target: &Path) -> ConversionResult<u64> {
    let contents = fs::read(source).map_err(|e| ConvertError::read(source.to_path_buf(), e))?;
    fs::write(target, &contents).map_err(|e| ConvertError::write(target.to_path_buf(), e))?;
    Ok(contents.len() as u64)
}

fn file_name(path: &Path) -> std::borrow::Cow<'_, str> {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy())
}
