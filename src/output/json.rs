//! JSON output: an array of CIDR strings.

use crate::models::CidrBlock;
use std::io::Write;

/// Write `blocks` as a pretty-printed JSON array followed by a newline.
pub fn write_json<W: Write>(out: &mut W, blocks: &[CidrBlock]) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut *out, blocks)?;
    writeln!(out).map_err(serde_json::Error::io)
}
