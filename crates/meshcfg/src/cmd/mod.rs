use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Subcommand};
use meshcfg_transport::serial::DEFAULT_BAUD_RATE;

use crate::exit::{CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod read;
pub mod replay;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read the configuration from a radio on a serial port.
    Read(ReadArgs),
    /// Assemble a configuration from a captured byte stream.
    Replay(ReplayArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Read(args) => read::run(args, format),
        Command::Replay(args) => replay::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Serial port the radio is attached to.
    #[arg(long, short = 'p', env = "MESHCFG_PORT")]
    pub port: String,
    /// Baud rate.
    #[arg(long, short = 'b', default_value_t = DEFAULT_BAUD_RATE)]
    pub baud: u32,
    /// Time allowed for the whole exchange (e.g. 15s, 500ms).
    #[arg(long, default_value = "15s")]
    pub timeout: String,
    /// Pause between waking the radio and requesting its configuration.
    #[arg(long, default_value = "100ms")]
    pub settle: String,
    /// Do not send the wake sequence first.
    #[arg(long)]
    pub no_wake: bool,
    /// Echo the radio's debug console to stderr.
    #[arg(long)]
    pub show_debug: bool,
    /// Exit with a timeout status when the configuration is incomplete.
    #[arg(long)]
    pub require_complete: bool,
}

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Capture file holding raw bytes read from a radio.
    pub path: PathBuf,
    /// Echo the radio's debug console to stderr.
    #[arg(long)]
    pub show_debug: bool,
    /// Exit with a data-invalid status when the capture ends before completion.
    #[arg(long)]
    pub require_complete: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Parse a duration such as `15s`, `500ms` or a bare number of seconds.
pub fn parse_duration(name: &str, input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, format!("{name} must not be empty")));
    }

    let (number, millis) = if let Some(num) = input.strip_suffix("ms") {
        (num, true)
    } else if let Some(num) = input.strip_suffix('s') {
        (num, false)
    } else {
        (input, false)
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid {name} value: {input}")))?;

    if millis {
        Ok(Duration::from_millis(value))
    } else {
        Ok(Duration::from_secs(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration_seconds() {
        assert_eq!(
            parse_duration("timeout", "5s").unwrap(),
            Duration::from_secs(5)
        );
        assert_eq!(
            parse_duration("timeout", "2").unwrap(),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn parse_duration_millis() {
        assert_eq!(
            parse_duration("settle", "150ms").unwrap(),
            Duration::from_millis(150)
        );
        assert_eq!(parse_duration("settle", "0ms").unwrap(), Duration::ZERO);
    }

    #[test]
    fn parse_duration_rejects_garbage() {
        let err = parse_duration("timeout", "soon").unwrap_err();
        assert_eq!(err.code, USAGE);
        assert!(err.message.contains("timeout"));

        assert_eq!(parse_duration("timeout", "  ").unwrap_err().code, USAGE);
    }
}
