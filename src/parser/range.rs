//! Dash range notation.
//!
//! - Full range: `192.168.1.1-192.168.1.255`, `2001:db8::1-2001:db8::ff`
//! - Short range (IPv4 only): `192.168.1.0-255`, where the number after the
//!   dash replaces the last octet

use crate::error::ParseError;
use crate::models::{Address, CidrBlock};
use crate::processing::decompose_range;
use std::net::{IpAddr, Ipv4Addr};

/// Parse a dash range into the blocks that cover it exactly.
///
/// The token is split at its last `-`. It is a full range if it contains a
/// `:` or the right side contains a `.`, otherwise a short range.
pub fn parse_range(s: &str) -> Result<Vec<CidrBlock>, ParseError> {
    let (start_str, end_str) = s
        .rsplit_once('-')
        .ok_or_else(|| ParseError::MalformedAddress(s.to_string()))?;

    if !s.contains(':') && !end_str.contains('.') {
        return parse_short_range(start_str, end_str);
    }

    let start = parse_addr(start_str)?;
    let end = parse_addr(end_str)?;
    decompose_range(start, end)
}

/// Parse `ADDR-N` where `N` in `0..=255` replaces the last octet of `ADDR`.
pub fn parse_short_range(start_str: &str, end_octet: &str) -> Result<Vec<CidrBlock>, ParseError> {
    let start: Ipv4Addr = start_str
        .parse()
        .map_err(|_| ParseError::MalformedAddress(start_str.to_string()))?;

    if end_octet.is_empty() || !end_octet.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::ShortRangeOctetInvalid(end_octet.to_string()));
    }
    let last: u8 = end_octet
        .parse()
        .map_err(|_| ParseError::ShortRangeOctetInvalid(end_octet.to_string()))?;

    let [a, b, c, _] = start.octets();
    let end = Ipv4Addr::new(a, b, c, last);

    decompose_range(Address::from(start), Address::from(end))
}

fn parse_addr(s: &str) -> Result<Address, ParseError> {
    s.parse::<IpAddr>()
        .map(Address::from)
        .map_err(|_| ParseError::MalformedAddress(s.to_string()))
}
