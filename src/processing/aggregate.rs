//! Sibling merging.
//!
//! Combines pairs of adjacent equal-size blocks into their parent until no
//! pair is left.

use super::dedup::sort_blocks;
use crate::models::CidrBlock;

/// Outcome of one scan over a sorted block list.
#[derive(Debug, PartialEq, Eq)]
pub struct MergePass {
    pub blocks: Vec<CidrBlock>,
    pub merges: usize,
}

/// Scan `blocks` in non-overlapping adjacent pairs and merge every sibling
/// pair into its parent. The input is left untouched.
pub fn merge_pass(blocks: &[CidrBlock]) -> MergePass {
    let mut merged = Vec::with_capacity(blocks.len());
    let mut merges = 0;
    let mut i = 0;

    while i < blocks.len() {
        let parent = blocks
            .get(i + 1)
            .filter(|next| blocks[i].is_sibling(next))
            .and_then(|_| blocks[i].parent());
        match parent {
            Some(parent) => {
                merged.push(parent);
                merges += 1;
                i += 2;
            }
            None => {
                merged.push(blocks[i]);
                i += 1;
            }
        }
    }

    MergePass {
        blocks: merged,
        merges,
    }
}

/// Repeat [`merge_pass`] until a pass merges nothing.
///
/// The list is re-sorted after every pass that merged, since a new parent may
/// now sit next to a block that was not its neighbour before.
pub fn aggregate(blocks: Vec<CidrBlock>) -> Vec<CidrBlock> {
    let mut blocks = blocks;
    let mut pass = 0;

    loop {
        pass += 1;
        let MergePass {
            blocks: merged,
            merges,
        } = merge_pass(&blocks);
        log::debug!(
            "aggregate pass {pass}: {merges} merge(s), {} block(s) left",
            merged.len()
        );
        if merges == 0 {
            return merged;
        }
        blocks = sort_blocks(merged);
    }
}
