use clap::Parser;

use anyhow::{Context, Result};

use pub2txt::cli::{Args, CliConfig};
use pub2txt::conversion::{convert_directory, ConversionSummary};

fn main() {
    let args = Args::parse();

    let exit_code = match run(args) {
        Ok(summary) if summary.is_clean() => 0,
        // Per-file failures were already reported on stderr; surface them
        // in the exit status
        Ok(_) => 1,
        Err(e) => {
            eprintln!("✗ {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

fn run(args: Args) -> Result<ConversionSummary> {
    let config = CliConfig::from_args(args)?;

    let summary = convert_directory(&config.convert_config)?;

    if config.want_stats() {
        output_statistics(&summary, config.is_quiet());
    }

    if let Some(report_path) = &config.args.report {
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(report_path, json)
            .with_context(|| format!("failed to write report '{}'", report_path.display()))?;

        if config.is_verbose() {
            eprintln!("report written to '{}'", report_path.display());
        }
    }

    Ok(summary)
}

fn output_statistics(summary: &ConversionSummary, quiet: bool) {
    if quiet {
        return;
    }

    println!("\nConversion Statistics:");
    println!("Files converted: {}", summary.converted);
    println!("Files failed: {}", summary.failed.len());
    println!("Bytes copied: {}", summary.bytes_copied);
    println!("Processing time: {}ms", summary.elapsed_ms);
}
