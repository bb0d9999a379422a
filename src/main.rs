//! Transaction Summary CLI
//!
//! Validates a batch of income/expense transactions and prints balance,
//! averages and large transactions.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv --threshold 2000
//! cargo run -- transactions.json --format json
//! cargo run                      # demo over built-in samples
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use rust_decimal::Decimal;
use std::env;
use std::io::{self, Write};
use transaction_summary::cli::{self, Command, OutputFormat, DEFAULT_RANDOM_COUNT};
use transaction_summary::sample::{problematic_transactions, random_transactions, sample_transactions};
use transaction_summary::{process, render, Batch, Result, Summary};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let command = cli::parse_args(env::args().skip(1))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Help => writeln!(out, "{}", cli::USAGE)?,
        Command::Info => write_info(&mut out)?,
        Command::Demo => run_demo(&mut out)?,
        Command::File {
            path,
            threshold,
            format,
        } => {
            let summary = Batch::from_path(&path)?.process(threshold)?;
            write_summary(&mut out, &summary, format)?;
        }
        Command::Random {
            count,
            threshold,
            format,
        } => {
            let batch = random_transactions(count, &mut rand::thread_rng());
            let summary = process(&batch, threshold)?;
            write_summary(&mut out, &summary, format)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, summary: &Summary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", render(summary))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, summary)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn run_demo<W: Write>(out: &mut W) -> Result<()> {
    let separator = "-".repeat(40);
    let batch = sample_transactions();

    writeln!(out, "DEMO 1: sample transactions, default threshold")?;
    writeln!(out, "{}", separator)?;
    write!(out, "{}", render(&process(&batch, None)?))?;

    writeln!(out)?;
    writeln!(out, "DEMO 2: sample transactions, threshold $2000")?;
    writeln!(out, "{}", separator)?;
    write!(out, "{}", render(&process(&batch, Some(Decimal::from(2000)))?))?;

    writeln!(out)?;
    writeln!(out, "DEMO 3: {} random transactions", DEFAULT_RANDOM_COUNT)?;
    writeln!(out, "{}", separator)?;
    let random = random_transactions(DEFAULT_RANDOM_COUNT, &mut rand::thread_rng());
    write!(out, "{}", render(&process(&random, None)?))?;

    writeln!(out)?;
    writeln!(out, "DEMO 4: error handling")?;
    writeln!(out, "{}", separator)?;
    match process(&problematic_transactions(), None) {
        Ok(_) => writeln!(out, "Problematic batch was unexpectedly accepted")?,
        Err(e) => {
            writeln!(out, "Caught expected error:")?;
            writeln!(out, "   {}", e)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "All demos completed")?;
    Ok(())
}

fn write_info<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "{}", env!("CARGO_PKG_DESCRIPTION"))?;
    writeln!(out)?;
    writeln!(out, "A transaction has a positive id, a non-blank description,")?;
    writeln!(out, "a non-negative amount and a type of income or expense.")?;
    writeln!(out)?;
    writeln!(out, "{}", cli::USAGE)?;
    Ok(())
}
