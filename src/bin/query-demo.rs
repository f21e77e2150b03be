//! CLI tool to run the query demo sections.
//!
//! Usage:
//!   query-demo
//!   query-demo --section live
//!   query-demo --section simple -o out/simple.txt

use clap::Parser;
use query_rs::demo::{self, Section};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Run the sample queries over the built-in datasets and print the results.
#[derive(Parser)]
#[command(name = "query-demo")]
struct Cli {
    /// Which section to run
    #[arg(short, long, value_enum, default_value_t = Section::All)]
    section: Section,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Log operator activity at debug level on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Log filter from `RUST_LOG` directives. `--verbose` lifts the level to
/// debug unless the directives already ask for debug or more.
fn log_filter(verbose: bool, directives: &str) -> EnvFilter {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives);
    if verbose
        && filter
            .max_level_hint()
            .is_none_or(|level| level < LevelFilter::DEBUG)
    {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

fn init_logging(verbose: bool) {
    let directives = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(verbose, &directives))
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error installing logger: {e}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = match demo::run_to_string(cli.section) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Demo error: {e}");
            process::exit(1);
        }
    };

    if let Some(out_path) = &cli.output {
        if let Some(parent) = Path::new(out_path.as_str()).parent()
            && !parent.as_os_str().is_empty()
            && fs::create_dir_all(parent).is_err()
        {
            eprintln!("Error creating output directory for '{out_path}'");
            process::exit(1);
        }
        if let Err(e) = fs::write(out_path, &output) {
            eprintln!("Error writing output file '{out_path}': {e}");
            process::exit(1);
        }
        tracing::debug!(path = %out_path, bytes = output.len(), "wrote demo output");
    } else if let Err(e) = io::stdout().write_all(output.as_bytes()) {
        eprintln!("Error writing output: {e}");
        process::exit(1);
    }
}
