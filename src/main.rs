/// Anagram Finder - find anagrams of a list of keys in a list of candidates
///
/// The main entry point for the anagram finder application. It parses command-line
/// arguments, loads configuration and coordinates matching and output.

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use log::{debug, LevelFilter};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anagram_finder::config::{self, Config};
use anagram_finder::utils::output_formatter;
use anagram_finder::{AnagramFinder, AnagramReport};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "anagram_finder",
    version,
    about = "Find all anagrams of a list of keys in a list of candidate strings",
    long_about = "Reads a file of keys and a file of candidate strings (one per line) and
reports, for every key, which candidates are anagrams of it.
Matching ignores case and duplicate lines unless --case-sensitive is given."
)]
struct Args {
    /// Text file containing the keys to look for anagrams of
    #[arg(long = "keys")]
    keys: PathBuf,

    /// Text file containing the candidate strings to search
    #[arg(long = "input")]
    input: PathBuf,

    /// Match strings exactly as written instead of ignoring case
    #[arg(long = "case-sensitive", action = ArgAction::SetTrue)]
    case_sensitive: bool,

    /// Drop blank lines instead of treating them as empty strings
    #[arg(long = "skip-blank", action = ArgAction::SetTrue)]
    skip_blank: bool,

    /// Output in markdown format (wrapped in triple backticks)
    #[arg(long = "md", action = ArgAction::SetTrue)]
    md: bool,

    /// Export results to JSON file
    #[arg(long = "json")]
    json: Option<PathBuf>,

    /// Export results to HTML report
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// Export results to CSV file
    #[arg(long = "csv")]
    csv: Option<PathBuf>,

    /// Suppress terminal output
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Show only summary information
    #[arg(long = "summary-only", action = ArgAction::SetTrue)]
    summary_only: bool,

    /// Path to JSON configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Set logging level (default: warn, or the config file's log_level)
    #[arg(long = "log-level")]
    log_level: Option<LevelFilter>,

    /// Log file path (default: stderr)
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Main entry point function
fn main() -> Result<()> {
    let start_time = Instant::now();

    let args = Args::parse();

    // Logging comes up before the config file is read so problems with it
    // are reported; the config's log level is applied afterwards.
    setup_logging(&args);
    let config = config::load_config(args.config.as_deref());
    log::set_max_level(log_level(&args, &config));
    debug!("Configuration: {:?}", config);

    let config = apply_overrides(config, &args);

    let finder = AnagramFinder::new(config);
    let report = finder.find_in_files(&args.keys, &args.input)?;

    export_all_results(&report, &args)?;

    if !args.quiet {
        print_results(&report, &args, start_time);
    }

    Ok(())
}

/// Effective log level: `--log-level`, then the config file, then warn
fn log_level(args: &Args, config: &Config) -> LevelFilter {
    args.log_level
        .or_else(|| config.log_level.as_deref().and_then(|l| l.parse().ok()))
        .unwrap_or(LevelFilter::Warn)
}

/// Set up logging to stderr or a log file
fn setup_logging(args: &Args) {
    let mut builder = env_logger::Builder::new();

    // The global max level set in `main` does the actual filtering
    builder.filter_level(LevelFilter::Trace);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(log_file) = &args.log_file {
        match File::create(log_file) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!(
                "{} cannot create log file {}: {}",
                "Warning:".yellow(),
                log_file.display(),
                e
            ),
        }
    }

    builder.init();
    log::set_max_level(args.log_level.unwrap_or(LevelFilter::Warn));
}

/// Command line flags win over the configuration file
fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if args.case_sensitive {
        config.matching.case_sensitive = true;
    }
    if args.skip_blank {
        config.input.skip_blank_lines = true;
    }
    config
}

/// Print summary and per-key results to the console
fn print_results(report: &AnagramReport, args: &Args, start_time: Instant) {
    println!("\n{}", output_formatter::create_summary(report));
    println!(
        "{} {:.2} seconds",
        "Time elapsed:".green(),
        start_time.elapsed().as_secs_f64()
    );

    if !args.summary_only {
        println!("\n{}", "=".repeat(80).bold());
        println!(
            "{} {}",
            "Anagrams of keys in:".cyan(),
            args.keys.display()
        );
        println!("{}", "=".repeat(80).bold());

        print!("{}", output_formatter::format_results(&report.results, &args.md));
    }
}

/// Export results based on command line arguments
fn export_all_results(report: &AnagramReport, args: &Args) -> Result<()> {
    if let Some(json_path) = &args.json {
        ensure_parent_dir(json_path)?;
        output_formatter::export_results_json(&report.results, json_path)?;
    }

    if let Some(html_path) = &args.html {
        ensure_parent_dir(html_path)?;
        output_formatter::create_html_report(report, html_path)?;
    }

    if let Some(csv_path) = &args.csv {
        ensure_parent_dir(csv_path)?;
        output_formatter::create_csv_report(&report.results, csv_path)?;
    }

    Ok(())
}

/// Create the directory an output file will be written to
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
