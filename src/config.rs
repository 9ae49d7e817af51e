//! Command line arguments and application constants.

use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Default log4rs configuration file, relative to the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Environment variable that overrides [`LOG_CONFIG_FILE`] (may be set in `.env`).
pub const LOG_CONFIG_ENV: &str = "CIDR_AGGREGATE_LOG_CONFIG";

/// Input path meaning "read standard input".
pub const STDIN_MARKER: &str = "-";

/// Combine a list of IP ranges into the smallest set of CIDR blocks.
///
/// Accepts CIDR blocks, bare addresses, wildcards (192.168.1.*), dash ranges
/// (10.0.0.1-10.0.0.20 or 10.0.0.0-127) and netmask pairs
/// (192.168.1.0 255.255.255.0), one per line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input file; standard input when absent or "-"
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Path to the log4rs configuration file
    #[arg(long, env = LOG_CONFIG_ENV, default_value = LOG_CONFIG_FILE)]
    pub log_config: PathBuf,
}

impl Args {
    /// Input file path, or `None` for standard input.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input
            .as_ref()
            .filter(|p| p.as_os_str() != STDIN_MARKER)
    }
}
