//! Combine a list of IP ranges into the smallest set of CIDR blocks.
//!
//! Lines may hold CIDR blocks, bare addresses, wildcards, dash ranges or
//! netmask pairs. IPv4 and IPv6 are reduced separately: contained blocks are
//! dropped, then sibling blocks are merged until nothing changes.
//!
//! # Modules
//!
//! - [`models`] - Address and CIDR block values
//! - [`parser`] - Line notations to CIDR blocks
//! - [`processing`] - Range decomposition and reduction
//! - [`output`] - Text and JSON writers
//! - [`config`] - Command line arguments
//! - [`logging`] - log4rs set-up
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod parser;
pub mod processing;

use error::RunError;
use itertools::Itertools;
use models::{CidrBlock, Family};
use output::OutputFormat;
use serde::Serialize;
use std::borrow::Cow;
use std::io::{BufRead, Write};

pub use error::ParseError;
pub use parser::parse_line;
pub use processing::{reduce, reduce_all};

/// Counters for one run.
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Lines read from the input.
    pub lines: usize,
    /// Blank and comment-only lines.
    pub skipped: usize,
    /// Lines rejected with a parse error.
    pub rejected: usize,
    /// Blocks produced by the parser before reduction.
    pub parsed: usize,
    /// Reduced IPv4 blocks written.
    pub ipv4_out: usize,
    /// Reduced IPv6 blocks written.
    pub ipv6_out: usize,
}

impl RunReport {
    pub fn blocks_out(&self) -> usize {
        self.ipv4_out + self.ipv6_out
    }
}

/// Parse every line of `input`, reduce, and write the result to `output`.
///
/// Lines that fail to parse are reported to `err_output` as `line N: <reason>`
/// and skipped; the rest are still reduced and written.
///
/// # Errors
/// * [`RunError::Io`] if `input` cannot be read or an output cannot be written
/// * [`RunError::Json`] if JSON output fails
pub fn run<R, W, E>(
    input: R,
    output: &mut W,
    err_output: &mut E,
    format: OutputFormat,
) -> Result<RunReport, RunError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut report = RunReport::default();
    let mut blocks: Vec<CidrBlock> = Vec::new();

    // Invalid UTF-8 is decoded per line and never ends the run
    for (i, raw) in input.split(b'\n').enumerate() {
        let raw = raw?;
        let line_no = i + 1;
        let line = decode_line(&raw);
        report.lines += 1;

        match parse_line(&line) {
            Ok(parsed) if parsed.is_empty() => report.skipped += 1,
            Ok(parsed) => {
                report.parsed += parsed.len();
                blocks.extend(parsed);
            }
            Err(e) => {
                log::debug!("line {line_no}: {line:?} rejected: {e}");
                report.rejected += 1;
                writeln!(err_output, "{}", crate::output::format_line_error(line_no, &e))?;
            }
        }
    }

    let reduced = reduce_all(blocks);
    let counts = reduced.iter().counts_by(|b| b.family());
    report.ipv4_out = counts.get(&Family::V4).copied().unwrap_or(0);
    report.ipv6_out = counts.get(&Family::V6).copied().unwrap_or(0);

    crate::output::write_blocks(output, &reduced, format)?;

    log::info!(
        "{} line(s), {} skipped, {} rejected, {} block(s) parsed -> {} IPv4 + {} IPv6",
        report.lines,
        report.skipped,
        report.rejected,
        report.parsed,
        report.ipv4_out,
        report.ipv6_out
    );
    Ok(report)
}

/// Decode one raw input line, dropping a trailing `\r`.
///
/// Invalid UTF-8 becomes U+FFFD, so a bad byte inside a comment is stripped
/// with the comment and one inside an address rejects only that line.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}
