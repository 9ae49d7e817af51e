//! Range to CIDR decomposition.
//!
//! Splits an inclusive address range into the fewest CIDR blocks that cover it
//! exactly.

use crate::error::ParseError;
use crate::models::{host_mask, Address, CidrBlock};

/// Convert `[start, end]` to the minimal ordered list of CIDR blocks.
///
/// # Errors
/// * [`ParseError::RangeFamilyMismatch`] if the endpoints are different families
/// * [`ParseError::RangeReversed`] if `start > end`
///
/// # Examples
/// ```
/// use cidr_aggregate::models::Address;
/// use cidr_aggregate::processing::decompose_range;
///
/// let blocks = decompose_range(Address::v4(0xC0A8_0101), Address::v4(0xC0A8_0105)).unwrap();
/// let text: Vec<String> = blocks.iter().map(|b| b.to_string()).collect();
/// assert_eq!(text, ["192.168.1.1/32", "192.168.1.2/31", "192.168.1.4/31"]);
/// ```
pub fn decompose_range(start: Address, end: Address) -> Result<Vec<CidrBlock>, ParseError> {
    if start.family() != end.family() {
        return Err(ParseError::RangeFamilyMismatch {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    if start > end {
        return Err(ParseError::RangeReversed {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let family = start.family();
    let width = family.width();
    let end_value = end.value();
    let mut cursor = start.value();
    let mut blocks = Vec::new();

    loop {
        let here = Address::from_value(family, cursor);
        // `end - cursor` is one less than the remaining count, which keeps
        // the whole-space case (2^128 addresses) inside a u128.
        let span = end_value - cursor;
        let size = biggest_block_bits(here, span);

        blocks.push(CidrBlock::new(here, width - size)?);

        let last = cursor | host_mask(width, width - size);
        if last >= end_value {
            break;
        }
        cursor = last + 1;
    }

    log::trace!(
        "decompose_range({start}-{end}) -> {} block(s)",
        blocks.len()
    );
    Ok(blocks)
}

/// Host-part size of the biggest block that starts at `start` and whose last
/// address is at most `span` past it.
///
/// Constrained by:
/// 1. The alignment of `start` (its trailing zero bits)
/// 2. The block must not run past the end of the range
fn biggest_block_bits(start: Address, span: u128) -> u8 {
    let mut size = start.trailing_zero_bits();
    while size > 0 && host_mask(size, 0) > span {
        size -= 1;
    }
    size
}
