//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;

use crate::conversion::ConvertConfig;
use crate::error::ConversionResult;

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "pub2txt")]
#[command(about = "Copy .pub files to .txt files within a directory")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Directory to scan (default: current working directory)
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Suffix identifying source files (exact, case-sensitive match)
    #[arg(long, default_value = ".pub")]
    pub source_suffix: String,

    /// Suffix used for target files
    #[arg(long, default_value = ".txt")]
    pub target_suffix: String,

    /// Abort the whole run on the first per-file error
    /// (default: report, skip, and exit non-zero at the end)
    #[arg(long)]
    pub fail_fast: bool,

    /// Print a run summary after processing
    #[arg(long)]
    pub stats: bool,

    /// Write the run summary as JSON to a file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable verbose diagnostics
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub convert_config: ConvertConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let convert_config = ConvertConfig {
            directory: args.directory.clone(),
            source_suffix: args.source_suffix.clone(),
            target_suffix: args.target_suffix.clone(),
            fail_fast: args.fail_fast,
            quiet: args.quiet,
            verbose: args.verbose,
        };

        // Reject suffix pairs that would overwrite inputs before touching disk
        convert_config.validate()?;

        Ok(Self {
            args,
            convert_config,
        })
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }
}
