mod logging;
mod prompt;
mod settings;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use wordgen_core::{
    AlphabetFlags, Error as CoreError, PredicateKind, RequestDraft, RequestIssue, resolve_request,
};
use wordgen_generate::output::report::write_report;
use wordgen_generate::{EnumerationEngine, FileSink, GenerationError, GenerationOutcome};

use logging::{LoggingError, init_logging};
use prompt::ConsolePrompt;
use settings::{SettingsError, load_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("{0}")]
    Logging(#[from] LoggingError),
}

#[derive(Parser, Debug)]
#[command(name = "wordgen", version, about = "Generate a wordlist")]
struct Cli {
    /// Length of each entry.
    #[arg(short = 'l', long)]
    length: Option<usize>,
    /// Individual words to add; their orderings are concatenated too.
    #[arg(short = 'w', long, num_args = 1..)]
    words: Vec<String>,
    /// Output file.
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: Option<PathBuf>,
    /// Include numbers.
    #[arg(short = 'n', long)]
    numbers: bool,
    /// Include capital letters.
    #[arg(short = 'c', long)]
    caps: bool,
    /// Include special characters.
    #[arg(short = 's', long)]
    special: bool,
    /// Incremental alphabet characters.
    #[arg(short = 'r', long = "incremental", value_name = "CHARS")]
    incremental: Option<String>,
    /// Append to an existing wordlist instead of overwriting it.
    #[arg(short = 'a', long)]
    append: bool,
    /// Include lowercase letters.
    #[arg(short = 'd', long = "default-lowercase")]
    default_lowercase: bool,
    /// Generate MM/DD/YYYY dates starting at this year.
    #[arg(long, value_name = "YEAR")]
    date: Option<u32>,
    /// Generate DDD-DD-DDDD ID numbers.
    #[arg(long)]
    social: bool,
    /// Drop entries with repeated characters or paired repeats.
    #[arg(long, conflicts_with = "smart_plus")]
    smart: bool,
    /// Like --smart, and also drop entries with rare letter pairs.
    #[arg(long)]
    smart_plus: bool,
    /// Skip the confirmation prompt for large wordlists.
    #[arg(short = 'y', long)]
    yes: bool,
    /// Print the estimate and exit without writing.
    #[arg(long)]
    dry_run: bool,
    /// Write a JSON run report to this path.
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
    /// Settings file (defaults to ./wordgen.toml when present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn draft(&self) -> RequestDraft {
        let predicate = if self.smart_plus {
            PredicateKind::SmartPlus
        } else if self.smart {
            PredicateKind::Smart
        } else {
            PredicateKind::None
        };

        RequestDraft {
            length: self.length,
            words: self.words.clone(),
            output: self.file.clone(),
            alphabet: AlphabetFlags {
                lowercase: self.default_lowercase,
                uppercase: self.caps,
                digits: self.numbers,
                punctuation: self.special,
                incremental: self.incremental.clone(),
            },
            append: self.append,
            date: self.date,
            social: self.social,
            predicate,
        }
    }
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    init_logging(&settings)?;

    let resolved = resolve_request(cli.draft())?;
    report_warnings(&resolved.warnings, &mut io::stderr());
    let request = resolved.request;

    let engine = EnumerationEngine::new(settings.generate_options());
    if let Some(estimate) = engine.estimate(&request) {
        println!(
            "Estimated wordlist size (sizes may vary): {:.0} bytes, about {:.1} seconds",
            estimate.byte_count, estimate.expected_seconds
        );
    }

    if cli.dry_run {
        tracing::info!(event = "dry_run", mode = %request.mode);
        return Ok(());
    }

    let mut gate = ConsolePrompt::new(cli.yes);
    match engine.run(&request, FileSink::open, &mut gate)? {
        GenerationOutcome::Completed(report) => {
            let elapsed = report.duration_ms as f64 / 1000.0;
            match report.estimate {
                Some(estimate) => println!(
                    "Wrote {} entries ({} bytes) in {:.2} seconds, estimated {:.2} seconds",
                    report.entries_written,
                    report.bytes_written,
                    elapsed,
                    estimate.expected_seconds
                ),
                None => println!(
                    "Wrote {} entries ({} bytes) in {:.2} seconds",
                    report.entries_written, report.bytes_written, elapsed
                ),
            }

            if let Some(path) = &cli.report {
                write_report(path, &report)?;
                tracing::info!(event = "report_written", path = %path.display());
            }
        }
        GenerationOutcome::Cancelled { .. } => {
            println!("Wordlist generation aborted.");
        }
    }

    Ok(())
}

/// Log ignored inputs and print them, so they show regardless of `RUST_LOG`.
fn report_warnings<W: Write>(issues: &[RequestIssue], out: &mut W) {
    for issue in issues {
        tracing::warn!(code = %issue.code, "{}", issue.message);
        let _ = writeln!(out, "Warning: {}", issue.message);
    }
}
