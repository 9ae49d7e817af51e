//! Input line parsing.
//!
//! Turns one line of text into zero or more [`CidrBlock`]s. Supported forms:
//! - CIDR or bare address: `192.168.1.0/24`, `192.168.1.1`, `2001:db8::/32`
//! - Wildcard: `192.168.1.*`, `2001:db8::*`
//! - Dash range: `192.168.1.1-192.168.1.20`, `2001:db8::1-2001:db8::ff`
//! - Short range: `192.168.1.0-127`
//! - Netmask pair: `192.168.1.0 255.255.255.0`
//!
//! Blank lines and `#`/`;` comments yield nothing.

mod netmask;
mod range;
mod wildcard;

use crate::error::ParseError;
use crate::models::CidrBlock;
use regex::Regex;
use std::sync::OnceLock;

pub use netmask::{is_contiguous_mask, parse_netmask};
pub use range::{parse_range, parse_short_range};
pub use wildcard::parse_wildcard;

/// Regex for the inline comment at the end of a line, with the blanks before it.
static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_comment_regex() -> &'static Regex {
    COMMENT_REGEX.get_or_init(|| Regex::new(r"\s*[#;].*$").expect("Invalid Regex"))
}

/// Remove the inline comment and surrounding whitespace.
fn strip_comment(line: &str) -> &str {
    let line = line.trim();
    match get_comment_regex().find(line) {
        Some(m) => line[..m.start()].trim(),
        None => line,
    }
}

/// Parse one input line.
///
/// # Returns
/// * `Ok(vec![])` - blank or comment-only line
/// * `Ok(blocks)` - the blocks the line describes, ordered by address
/// * `Err` - the line is not a supported notation; nothing from it is kept
pub fn parse_line(line: &str) -> Result<Vec<CidrBlock>, ParseError> {
    let s = strip_comment(line);
    if s.is_empty() {
        return Ok(Vec::new());
    }

    let tokens: Vec<&str> = s.split_whitespace().collect();
    if let [addr, mask] = tokens[..] {
        if !addr.contains(['/', '-', '*']) {
            return parse_netmask(addr, mask).map(|block| vec![block]);
        }
    }

    // Anything after the first token is an annotation
    let token = tokens[0];
    log::trace!("parse_line token={token:?}");

    if token.contains('*') {
        parse_wildcard(token).map(|block| vec![block])
    } else if token.contains('-') {
        parse_range(token)
    } else {
        token.parse::<CidrBlock>().map(|block| vec![block])
    }
}
