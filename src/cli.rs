//! Command-line argument parsing.

use crate::error::{Error, Result};
use crate::validator::parse_threshold;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Number of generated records in the demo run.
pub const DEFAULT_RANDOM_COUNT: usize = 50;

pub const USAGE: &str = "\
Usage: transaction-summary [OPTIONS] [INPUT]

Validates a batch of transactions and prints a summary report.
Without INPUT, runs a demo over built-in sample batches.

Arguments:
  [INPUT]                 CSV (id,description,amount,type) or JSON array of transactions

Options:
  -t, --threshold <N>     Minimum amount of a large transaction [default: 1000]
  -f, --format <FORMAT>   Output format: text or json [default: text]
  -r, --random <N>        Summarize N generated transactions instead of INPUT
  -i, --info              Show information about the tool
  -h, --help              Show this help

Environment:
  RUST_LOG                Log verbosity, e.g. debug or warn";

/// How a summary is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print usage.
    Help,

    /// Print tool information.
    Info,

    /// Run the built-in demonstrations.
    Demo,

    /// Summarize a batch from a file.
    File {
        path: PathBuf,
        threshold: Option<Decimal>,
        format: OutputFormat,
    },

    /// Summarize a generated batch.
    Random {
        count: usize,
        threshold: Option<Decimal>,
        format: OutputFormat,
    },
}

/// Parses arguments, excluding the program name.
///
/// `--help` and `--info` win over everything else on the line.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut path = None;
    let mut threshold = None;
    let mut format = OutputFormat::default();
    let mut random = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-i" | "--info" => return Ok(Command::Info),
            "-t" | "--threshold" => {
                let value = next_value(&mut args, &arg)?;
                threshold = Some(parse_threshold(&value)?);
            }
            "-f" | "--format" => {
                let value = next_value(&mut args, &arg)?;
                format = match value.as_str() {
                    "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    other => return Err(Error::UnsupportedFormat(other.to_string())),
                };
            }
            "-r" | "--random" => {
                let value = next_value(&mut args, &arg)?;
                let count = value
                    .parse::<usize>()
                    .map_err(|_| Error::UnknownArgument(format!("{} {}", arg, value)))?;
                random = Some(count);
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(Error::UnknownArgument(flag.to_string()));
            }
            input if path.is_none() => path = Some(PathBuf::from(input)),
            other => return Err(Error::UnknownArgument(other.to_string())),
        }
    }

    Ok(match (path, random) {
        (Some(path), _) => Command::File {
            path,
            threshold,
            format,
        },
        (None, Some(count)) => Command::Random {
            count,
            threshold,
            format,
        },
        (None, None) => Command::Demo,
    })
}

fn next_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| Error::MissingArgument(flag.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use rust_decimal_macros::dec;

    fn parse(args: &[&str]) -> Result<Command> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_arguments_runs_demo() {
        assert_eq!(parse(&[]).unwrap(), Command::Demo);
    }

    #[test]
    fn test_help_and_info() {
        assert_eq!(parse(&["--help"]).unwrap(), Command::Help);
        assert_eq!(parse(&["data.csv", "-h"]).unwrap(), Command::Help);
        assert_eq!(parse(&["-i"]).unwrap(), Command::Info);
    }

    #[test]
    fn test_file_with_options() {
        let cmd = parse(&["--threshold", "2000", "data.json", "--format", "json"]).unwrap();
        assert_eq!(
            cmd,
            Command::File {
                path: PathBuf::from("data.json"),
                threshold: Some(dec!(2000)),
                format: OutputFormat::Json,
            }
        );
    }

    #[test]
    fn test_random_batch() {
        let cmd = parse(&["-r", "20", "-t", "0"]).unwrap();
        assert_eq!(
            cmd,
            Command::Random {
                count: 20,
                threshold: Some(dec!(0)),
                format: OutputFormat::Text,
            }
        );
    }

    #[test]
    fn test_invalid_threshold() {
        assert_eq!(
            parse(&["-t", "-100", "data.csv"]).unwrap(),
            Command::File {
                path: PathBuf::from("data.csv"),
                threshold: Some(dec!(-100)),
                format: OutputFormat::Text,
            }
        );
        assert!(matches!(
            parse(&["--threshold", "many"]),
            Err(Error::Validation(ValidationError::InvalidThreshold))
        ));
    }

    #[test]
    fn test_argument_errors() {
        assert!(matches!(parse(&["--threshold"]), Err(Error::MissingArgument(_))));
        assert!(matches!(parse(&["--verbose"]), Err(Error::UnknownArgument(_))));
        assert!(matches!(parse(&["a.csv", "b.csv"]), Err(Error::UnknownArgument(_))));
        assert!(matches!(parse(&["-f", "xml"]), Err(Error::UnsupportedFormat(_))));
        assert!(matches!(parse(&["-r", "ten"]), Err(Error::UnknownArgument(_))));
    }
}
