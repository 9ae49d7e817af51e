//! Netmask pair notation: `192.168.1.0 255.255.255.0`.

use crate::error::ParseError;
use crate::models::{host_mask, Address, CidrBlock};
use std::net::IpAddr;

/// Parse an address and a dotted (or IPv6) netmask into one block.
///
/// # Errors
/// * [`ParseError::MalformedAddress`] if either token is not an address
/// * [`ParseError::MaskFamilyMismatch`] if address and mask differ in family
/// * [`ParseError::NonContiguousMask`] if the mask is not ones followed by zeros
pub fn parse_netmask(addr_str: &str, mask_str: &str) -> Result<CidrBlock, ParseError> {
    let addr = parse_addr(addr_str)?;
    let mask = parse_addr(mask_str)?;

    if addr.family() != mask.family() {
        return Err(ParseError::MaskFamilyMismatch {
            addr: addr_str.to_string(),
            mask: mask_str.to_string(),
        });
    }
    if !is_contiguous_mask(mask) {
        return Err(ParseError::NonContiguousMask(mask_str.to_string()));
    }

    let prefix_len = mask.value().count_ones() as u8;
    CidrBlock::new(addr, prefix_len)
}

/// True if `mask` is a run of 1-bits followed by a run of 0-bits.
///
/// `255.255.255.0` is contiguous, `255.255.254.1` is not.
pub fn is_contiguous_mask(mask: Address) -> bool {
    // The inverted mask must look like 0..01..1, i.e. one less than a power of two
    let inverted = !mask.value() & host_mask(mask.width(), 0);
    inverted & inverted.wrapping_add(1) == 0
}

fn parse_addr(s: &str) -> Result<Address, ParseError> {
    s.parse::<IpAddr>()
        .map(Address::from)
        .map_err(|_| ParseError::MalformedAddress(s.to_string()))
}
