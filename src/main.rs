//! pagesim - command-line driver.
//!
//! Usage: pagesim [OPTIONS]
//!
//! Runs FIFO, LRU and Optimal (or the policies named with `--policy`) over a
//! reference string and prints one frame table per policy. The frame count is
//! taken from `--frames` or, when absent, asked for on stdin.
//!
//! Logging goes to stderr and is controlled by the `PAGESIM_LOG` filter
//! (e.g. `PAGESIM_LOG=pagesim=trace`).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pagesim::common::config::{parse_capacity, LOG_ENV_VAR};
use pagesim::{report, PolicyKind, ReferenceString, Simulator};

/// Compare page replacement policies on a reference string.
#[derive(Debug, Parser)]
#[command(name = "pagesim", version, about)]
struct Args {
    /// Number of frames (prompted for when omitted).
    #[arg(short, long)]
    frames: Option<String>,

    /// File with page ids separated by whitespace or commas.
    #[arg(short, long, value_name = "FILE")]
    reference: Option<PathBuf>,

    /// Policy to run: fifo, lru or optimal. Repeatable; defaults to all three.
    #[arg(short, long = "policy", value_name = "POLICY")]
    policies: Vec<PolicyKind>,

    /// Also print a one-line-per-policy summary.
    #[arg(long)]
    summary: bool,
}

fn main() {
    let args = Args::parse();
    init_logging();

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let reference = match &args.reference {
        Some(path) => ReferenceString::load(path)
            .with_context(|| format!("Unable to load reference string {}", path.display()))?,
        None => ReferenceString::default(),
    };
    tracing::debug!(references = reference.len(), "loaded reference string");

    let raw_frames = match &args.frames {
        Some(frames) => frames.clone(),
        None => prompt_frames()?,
    };
    let capacity = parse_capacity(&raw_frames)?;

    let sim = Simulator::new(reference, capacity)?;
    let kinds: &[PolicyKind] = if args.policies.is_empty() {
        &PolicyKind::ALL
    } else {
        &args.policies
    };
    let runs = sim.compare(kinds)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for policy_run in &runs {
        writeln!(out, "\n{} Page Replacement:", policy_run.kind)?;
        write!(out, "{}", report::render(sim.reference(), &policy_run.timeline))?;
    }
    if args.summary {
        writeln!(out)?;
        write!(out, "{}", report::render_comparison(&runs))?;
    }

    Ok(())
}

/// Ask for the frame count on stdin.
fn prompt_frames() -> anyhow::Result<String> {
    print!("Enter the number of frames: ");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Unable to read frame count")?;
    if read == 0 {
        return Err(pagesim::Error::MalformedInput("missing frame count".to_string()).into());
    }
    Ok(line)
}
