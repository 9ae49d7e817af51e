//! Error types for parsing and running an aggregation.

use thiserror::Error;

/// Reasons a single input line can be rejected.
///
/// Every variant is local to one line: the line contributes no blocks and the
/// run carries on with the next one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid address {0:?}")]
    MalformedAddress(String),

    #[error("invalid CIDR {0:?}")]
    MalformedCidr(String),

    #[error("invalid wildcard format {0:?}: wildcard must be at end")]
    WildcardNotTrailing(String),

    #[error("invalid wildcard format {0:?}: unexpected number of segments")]
    WildcardSegmentCountInvalid(String),

    #[error("invalid range: start {start} > end {end}")]
    RangeReversed { start: String, end: String },

    #[error("invalid range: {start} and {end} are different address families")]
    RangeFamilyMismatch { start: String, end: String },

    #[error("invalid short range end octet {0:?}")]
    ShortRangeOctetInvalid(String),

    #[error("invalid netmask {0:?}: not a valid mask (non-contiguous bits)")]
    NonContiguousMask(String),

    #[error("invalid netmask {mask:?}: address {addr} is a different address family")]
    MaskFamilyMismatch { addr: String, mask: String },
}

/// Failures that abort a whole run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("error reading input: {0}")]
    Io(#[from] std::io::Error),

    #[error("error writing JSON output: {0}")]
    Json(#[from] serde_json::Error),
}
