//! Ansiscroll - render ANSI-colored lines as styled runs
//!
//! Reads stdin one line at a time, feeds each line to a scrollback as one
//! message, and writes every resulting entry to stdout as a JSON line.

use std::env;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use ansiscroll::ansi::present_runs;
use ansiscroll::{Config, ConfigLoader, EntryKind, LogEntry, PresentedRun, Scrollback};

/// Command line arguments
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Start with formatting disabled
    plain: bool,
    /// Enable debug logging
    debug: bool,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    let Some(path) = args.get(i + 1) else {
                        bail!("Missing config file path");
                    };
                    app_args.config_path = Some(PathBuf::from(path));
                    i += 1;
                }
                "--plain" | "-p" => app_args.plain = true,
                "--debug" | "-d" => app_args.debug = true,
                "--help" | "-h" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("ansiscroll v{}", ansiscroll::VERSION);
                    process::exit(0);
                }
                arg => bail!("Unknown argument: {}", arg),
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("ansiscroll - render ANSI-colored lines from stdin as styled JSON runs");
    println!();
    println!("USAGE:");
    println!("    ansiscroll [OPTIONS] < input");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -p, --plain            Ignore SGR sequences (formatting disabled)");
    println!("    -d, --debug            Enable debug logging");
    println!("    -h, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("ENVIRONMENT:");
    println!("    ANSISCROLL_CONFIG      Path to configuration file");
    println!("    ANSISCROLL_DEBUG       Enable debug logging (1 or true)");
    println!("    RUST_LOG               Set logging level (error, warn, info, debug, trace)");
}

/// One output line
#[derive(Debug, Serialize)]
struct EntryRecord {
    kind: EntryKind,
    runs: Vec<PresentedRun>,
}

impl From<&LogEntry> for EntryRecord {
    fn from(entry: &LogEntry) -> Self {
        Self {
            kind: entry.kind,
            runs: present_runs(&entry.runs),
        }
    }
}

fn init_logging(debug: bool) {
    let env_debug = env::var("ANSISCROLL_DEBUG")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let log_level = if debug || env_debug { "debug" } else { "info" };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

fn load_configuration(args: &AppArgs) -> Result<Config> {
    let mut config = match &args.config_path {
        Some(path) => ConfigLoader::load_from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ConfigLoader::load().context("loading configuration")?,
    };

    if args.plain {
        config.formatting.enabled = false;
    }
    Ok(config)
}

fn run(args: &AppArgs) -> Result<()> {
    let config = load_configuration(args)?;
    let mut scrollback = Scrollback::with_config(&config);

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut failures = 0usize;

    for (number, line) in stdin.lock().lines().enumerate() {
        let line = line.context("reading stdin")?;

        if let Err(e) = scrollback.receive(&line) {
            warn!("Line {} shown raw: {}", number + 1, e);
            failures += 1;
        }

        if let Some(entry) = scrollback.last() {
            serde_json::to_writer(&mut out, &EntryRecord::from(entry))
                .context("writing output")?;
            out.write_all(b"\n").context("writing output")?;
        }
    }

    out.flush().context("flushing output")?;
    debug!("{} entries in scrollback", scrollback.len());
    if failures > 0 {
        info!("{} line(s) contained malformed escape sequences", failures);
    }
    Ok(())
}

fn main() {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_help();
        process::exit(2);
    });

    init_logging(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
