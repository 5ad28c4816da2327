//! Command line arguments
//!
//! Every failure, including `-h`, goes to stderr and exits with status 1.

use std::ffi::OsString;
use std::process::ExitCode;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use stopwatch_core::{IntervalError, parse_interval};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "stopwatch")]
#[command(about = "Display the time elapsed since start until interrupted")]
#[command(version)]
#[command(override_usage = "stopwatch [-d <delay>]")]
struct Cli {
    /// Refresh interval in seconds, e.g. 0.5 or 2 [default: 0.1]
    #[arg(short = 'd', value_name = "delay")]
    delay: Option<String>,
}

/// Validated run options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Refresh interval from `-d`. None falls back to the config file.
    pub refresh_interval: Option<Duration>,
}

#[derive(Debug)]
pub enum Invocation {
    Run(Options),
    /// `-V`: print this and exit successfully
    Version(String),
}

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("help requested")]
    Help(String),

    #[error("invalid command line")]
    Usage(#[source] clap::Error),

    #[error("invalid value for option -d: {value}")]
    InvalidDelay {
        value: String,
        #[source]
        source: IntervalError,
    },
}

impl ArgsError {
    /// Print the diagnostic and usage to stderr.
    pub fn report(&self) {
        match self {
            Self::Help(help) => eprint!("{help}"),
            // clap's own rendering already ends with the usage line
            Self::Usage(err) => eprint!("{err}"),
            Self::InvalidDelay { source, .. } => {
                eprintln!("{self} ({source})");
                eprintln!("{}", usage());
            }
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }
}

pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

pub fn parse_args<I, T>(argv: I) -> Result<Invocation, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(err) => {
            return match err.kind() {
                ErrorKind::DisplayVersion => Ok(Invocation::Version(err.to_string())),
                ErrorKind::DisplayHelp => Err(ArgsError::Help(err.to_string())),
                _ => Err(ArgsError::Usage(err)),
            };
        }
    };

    let refresh_interval = match cli.delay {
        Some(value) => match parse_interval(&value) {
            Ok(interval) => Some(interval),
            Err(source) => return Err(ArgsError::InvalidDelay { value, source }),
        },
        None => None,
    };

    Ok(Invocation::Run(Options { refresh_interval }))
}
