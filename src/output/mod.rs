//! Output formatting for reduced blocks.
//!
//! This module handles writing results and per-line diagnostics:
//! - [`text`] - one CIDR block per line
//! - [`json`] - a JSON array of CIDR strings
//! - [`terminal`] - error lines for the diagnostic stream

mod json;
mod terminal;
mod text;

use crate::error::RunError;
use crate::models::CidrBlock;
use std::io::Write;

pub use json::write_json;
pub use terminal::format_line_error;
pub use text::write_text;

/// How reduced blocks are written.
#[derive(clap::ValueEnum, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `address/prefix` per line
    #[default]
    Text,
    /// JSON array of `address/prefix` strings
    Json,
}

/// Write `blocks` to `out` in `format`.
pub fn write_blocks<W: Write>(
    out: &mut W,
    blocks: &[CidrBlock],
    format: OutputFormat,
) -> Result<(), RunError> {
    match format {
        OutputFormat::Text => write_text(out, blocks)?,
        OutputFormat::Json => write_json(out, blocks)?,
    }
    out.flush()?;
    Ok(())
}
