//! Redundant block removal.
//!
//! Handles dropping blocks that are already covered by another block.

use crate::models::CidrBlock;

/// Sort blocks by base address, then prefix length (larger network first).
pub fn sort_blocks(mut blocks: Vec<CidrBlock>) -> Vec<CidrBlock> {
    blocks.sort_unstable();
    blocks
}

/// Remove every block contained in an earlier kept block.
///
/// `blocks` must be sorted with [`sort_blocks`]: a container then always
/// comes before anything it contains, so comparing with the last kept block
/// is enough.
pub fn remove_contained(blocks: Vec<CidrBlock>) -> Vec<CidrBlock> {
    let mut kept: Vec<CidrBlock> = Vec::with_capacity(blocks.len());

    for block in blocks {
        match kept.last() {
            Some(last) if last.contains(&block) => {
                log::trace!("{block} is covered by {last}");
            }
            _ => kept.push(block),
        }
    }

    kept
}
