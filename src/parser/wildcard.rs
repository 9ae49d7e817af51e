//! Wildcard notation.
//!
//! - `192.168.1.*` -> `192.168.1.0/24`
//! - `10.*.*.*` -> `10.0.0.0/8`
//! - `2001:db8::*` -> `2001:db8::/32` (everything after `::` is wildcarded)
//! - `2001:db8:abcd:*` -> `2001:db8:abcd::/48`

use crate::error::ParseError;
use crate::models::{Address, CidrBlock};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Bits covered by one IPv4 octet.
const OCTET_BITS: u8 = 8;
/// Bits covered by one IPv6 segment.
const SEGMENT_BITS: u8 = 16;

/// Parse a wildcard token into one block.
pub fn parse_wildcard(s: &str) -> Result<CidrBlock, ParseError> {
    if s.contains(':') {
        parse_ipv6_wildcard(s)
    } else {
        parse_ipv4_wildcard(s)
    }
}

fn parse_ipv4_wildcard(s: &str) -> Result<CidrBlock, ParseError> {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 4 {
        return Err(ParseError::WildcardSegmentCountInvalid(s.to_string()));
    }

    let mut octets = [0u8; 4];
    let mut first_wildcard = None;
    for (i, part) in parts.iter().enumerate() {
        match (*part, first_wildcard) {
            ("*", None) => first_wildcard = Some(i),
            ("*", Some(_)) => {}
            (_, Some(_)) => return Err(ParseError::WildcardNotTrailing(s.to_string())),
            (octet, None) => {
                octets[i] = parse_octet(octet)
                    .ok_or_else(|| ParseError::MalformedAddress(s.to_string()))?;
            }
        }
    }

    let first_wildcard =
        first_wildcard.ok_or_else(|| ParseError::MalformedAddress(s.to_string()))?;
    let prefix_len = first_wildcard as u8 * OCTET_BITS;
    CidrBlock::new(Address::from(Ipv4Addr::from(octets)), prefix_len)
}

fn parse_ipv6_wildcard(s: &str) -> Result<CidrBlock, ParseError> {
    let Some(head) = s.strip_suffix('*') else {
        return Err(ParseError::WildcardNotTrailing(s.to_string()));
    };
    if head.contains('*') {
        return Err(ParseError::WildcardNotTrailing(s.to_string()));
    }

    let (prefix, max_segments) = match head.split_once("::") {
        Some((before, after)) => {
            if after.contains("::") {
                return Err(ParseError::WildcardSegmentCountInvalid(s.to_string()));
            }
            // Segments written after `::` would leave the prefix length ambiguous
            if !after.is_empty() {
                return Err(ParseError::MalformedAddress(s.to_string()));
            }
            // `::` stands for at least one zero segment
            (before, 7)
        }
        None => {
            let before = head
                .strip_suffix(':')
                .filter(|before| !before.is_empty())
                .ok_or_else(|| ParseError::MalformedAddress(s.to_string()))?;
            (before, 8)
        }
    };

    let segments: Vec<&str> = if prefix.is_empty() {
        Vec::new()
    } else {
        prefix.split(':').collect()
    };
    if segments.len() > max_segments {
        return Err(ParseError::WildcardSegmentCountInvalid(s.to_string()));
    }

    let mut words = [0u16; 8];
    for (word, segment) in words.iter_mut().zip(&segments) {
        *word =
            parse_segment(segment).ok_or_else(|| ParseError::MalformedAddress(s.to_string()))?;
    }

    let prefix_len = segments.len() as u8 * SEGMENT_BITS;
    CidrBlock::new(Address::from(Ipv6Addr::from(words)), prefix_len)
}

/// Decimal octet `0..=255` without sign, whitespace or leading zeros,
/// matching what `Ipv4Addr` accepts.
fn parse_octet(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse().ok()
}

/// Hex segment of one to four digits.
fn parse_segment(s: &str) -> Option<u16> {
    if s.is_empty() || s.len() > 4 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(s, 16).ok()
}
