//! Address and network values.
//!
//! - [`Address`] - an IPv4 or IPv6 address as a fixed-width integer
//! - [`CidrBlock`] - a masked base address plus prefix length

mod address;
mod cidr;

pub use address::{get_cidr_mask, host_mask, Address, Family};
pub use cidr::CidrBlock;
