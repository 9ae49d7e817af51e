//! Block processing logic.
//!
//! This module contains the address-range algebra:
//! - [`decompose`] - Splitting an address range into CIDR blocks
//! - [`dedup`] - Sorting and removal of contained blocks
//! - [`aggregate`] - Merging sibling blocks into their parent

mod aggregate;
mod decompose;
mod dedup;

use crate::models::{CidrBlock, Family};

// Re-export public functions
pub use aggregate::{aggregate, merge_pass, MergePass};
pub use decompose::decompose_range;
pub use dedup::{remove_contained, sort_blocks};

/// Reduce blocks of one address family to the minimal equivalent set.
///
/// Sorts, drops blocks covered by another block, then merges siblings until
/// nothing changes. The result is sorted and non-overlapping.
pub fn reduce(blocks: Vec<CidrBlock>) -> Vec<CidrBlock> {
    if blocks.is_empty() {
        return blocks;
    }
    let input_count = blocks.len();
    let sorted = sort_blocks(blocks);
    let distinct = remove_contained(sorted);
    log::debug!(
        "reduce: {} block(s) in, {} after removing contained blocks",
        input_count,
        distinct.len()
    );
    aggregate(distinct)
}

/// Reduce a mixed list: IPv4 and IPv6 are reduced separately and the IPv4
/// result comes first.
pub fn reduce_all(blocks: Vec<CidrBlock>) -> Vec<CidrBlock> {
    let (v4, v6): (Vec<CidrBlock>, Vec<CidrBlock>) = blocks
        .into_iter()
        .partition(|b| b.family() == Family::V4);

    let mut result = reduce(v4);
    result.extend(reduce(v6));
    result
}
