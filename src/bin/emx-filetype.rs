//! emx-filetype CLI
//!
//! Report the text encoding of a file (similar to the `file` command).

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use emx_filetype::{DetectConfig, Detector};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "emx-filetype")]
#[command(author = "nzinfo <li.monan@gmail.com>")]
#[command(version)]
#[command(about = "Classify a file as empty, ASCII, ISO-8859, UTF-8 or data")]
struct Cli {
    /// File to classify
    path: PathBuf,

    /// Classify every file under PATH when it is a directory
    #[arg(short, long)]
    recursive: bool,

    /// Rank ISO-8859 above UTF-8 when both fit
    #[arg(long)]
    prefer_iso8859: bool,

    /// Verbose output (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let detector = Detector::with_config(DetectConfig {
        prefer_utf8: !cli.prefer_iso8859,
        ..DetectConfig::default()
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.recursive && cli.path.is_dir() {
        classify_directory(&detector, &cli.path, &mut out)?;
    } else {
        report(&detector, &cli.path, &mut out)?;
    }

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Classify one path and print `<path>: <label>`.
///
/// Unreadable paths are reported, not treated as failures.
fn report(detector: &Detector, path: &Path, out: &mut impl Write) -> Result<()> {
    tracing::debug!(path = %path.display(), "classifying");

    let written = match detector.classify_path(path) {
        Ok(verdict) => writeln!(out, "{}: {}", path.display(), verdict),
        Err(e) => {
            tracing::info!(path = %path.display(), error = %e, "cannot classify");
            writeln!(out, "{}: cannot determine ({})", path.display(), e.io_error())
        }
    };
    written.context("Failed to write to stdout")
}

fn classify_directory(detector: &Detector, dir: &Path, out: &mut impl Write) -> Result<()> {
    let entries = walkdir::WalkDir::new(dir).sort_by_file_name();

    for entry in entries {
        match entry {
            Ok(entry) if entry.file_type().is_file() => report(detector, entry.path(), out)?,
            Ok(_) => {}
            Err(e) => {
                let path = e.path().unwrap_or(dir).to_path_buf();
                tracing::warn!(path = %path.display(), error = %e, "skipping entry");
                writeln!(out, "{}: cannot determine ({})", path.display(), e)
                    .context("Failed to write to stdout")?;
            }
        }
    }

    Ok(())
}
