//! Intentions Render CLI
//!
//! Collects the `@describe` / `when` / `case` / `expect` intentions of every
//! test module below a directory into one JSON report.
//!
//! # Usage
//!
//! ```bash
//! # Scan the working directory, write .intentions/intentions.json
//! cargo run --bin intentions-render
//!
//! # Scan tests/, custom output, verbose logging
//! cargo run --bin intentions-render -- tests --output docs/intentions.json --verbose
//!
//! # Print the report instead of writing it
//! cargo run --bin intentions-render -- tests --print
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use intentions_render::{
    collect_intentions, create_intentions_json, render_report, RenderConfig, Result,
};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directive added on top of any `RUST_LOG` filter by `--verbose`
const VERBOSE_DIRECTIVE: &str = "intentions_render=debug";

#[derive(Parser)]
#[command(name = "intentions-render")]
#[command(about = "Render when/case/expect intentions of Python tests into JSON", long_about = None)]
struct Cli {
    /// Directory to scan for test modules
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Output file (overrides output_dir/output_file of the configuration)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the report to stdout instead of writing the output file
    #[arg(long, conflicts_with = "output")]
    print: bool,
}

/// `RUST_LOG` directives (default `warn`), with crate debug output on top
/// when `verbose` is set
fn log_filter(verbose: bool, env_directives: Option<&str>) -> EnvFilter {
    let filter = match env_directives.map(str::trim) {
        Some(directives) if !directives.is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new("warn"),
    };
    if !verbose {
        return filter;
    }
    match VERBOSE_DIRECTIVE.parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

fn init_logger(verbose: bool) {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(log_filter(verbose, env_directives.as_deref()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => RenderConfig::from_yaml(path)?,
        None => RenderConfig::default(),
    };

    if cli.print {
        let report = collect_intentions(&cli.directory, &config)?;
        print!("{}", render_report(&report)?);
        return Ok(());
    }

    let output = cli.output.unwrap_or_else(|| config.output_path());
    let report = create_intentions_json(&cli.directory, &output, &config)?;
    println!(
        "{} ({} test cases)",
        output.display(),
        report.record_count()
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
