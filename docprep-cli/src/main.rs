//! Command-line interface for docprep
//! This binary expands `#include` directives in a markdown document and strips editorial lines.
//!
//! Usage:
//!   docprep `<input>` `<output>`   - Process `<input>` and write the result to `<output>`
//!
//! Include paths are resolved against the current working directory. Diagnostics go to
//! stderr; their level comes from `RUST_LOG`, or `logging.level` in `docprep.toml`.

use clap::{value_parser, Arg, Command};
use docprep_processor::Processor;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("docprep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Expand #include directives and strip editorial lines from a markdown document")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the source document")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Path to the output document (created or overwritten)")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(2),
        )
        .get_matches();

    let config = docprep_config::load_from_dir(".")
        .or_else(|e| {
            eprintln!("Warning: ignoring {}: {}", docprep_config::CONFIG_FILE_NAME, e);
            docprep_config::load_defaults()
        })
        .unwrap_or_else(|e| {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        });
    init_tracing(&config.logging.level);

    let input = matches
        .get_one::<PathBuf>("input")
        .expect("input is a required argument");
    let output = matches
        .get_one::<PathBuf>("output")
        .expect("output is a required argument");
    handle_process_command(input, output);
}

/// Handle the process command
fn handle_process_command(input: &Path, output: &Path) {
    let summary = Processor::new()
        .process_file(input, output)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        lines_written = summary.lines_written,
        lines_skipped = summary.lines_skipped,
        includes_expanded = summary.includes_expanded,
        comments_dropped = summary.comments_dropped,
        "document processed"
    );
}

/// Install the stderr subscriber, preferring `RUST_LOG` over the configured level
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
