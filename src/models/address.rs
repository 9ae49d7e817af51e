//! Fixed-width address values for both IP families.
//!
//! An [`Address`] stores its bits in a `u128` together with a [`Family`] tag,
//! so IPv4 and IPv6 share one implementation of masking and alignment while
//! the derived ordering never lets the two families interleave.

use crate::error::ParseError;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// IP address family. IPv4 sorts before IPv6.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Number of bits in an address of this family.
    pub const fn width(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// Highest address value of this family.
    pub const fn max_value(self) -> u128 {
        match self {
            Family::V4 => u32::MAX as u128,
            Family::V6 => u128::MAX,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// Mask with the top `len` bits of a `width`-bit address set.
///
/// `len` is clamped to `width`.
///
/// # Examples
/// ```
/// use cidr_aggregate::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(32, 24), 0xFFFF_FF00);
/// assert_eq!(get_cidr_mask(128, 0), 0);
/// ```
pub fn get_cidr_mask(width: u8, len: u8) -> u128 {
    let len = len.min(width);
    !host_mask(width, len) & all_ones(width)
}

/// Mask with the low `width - len` host bits set.
pub fn host_mask(width: u8, len: u8) -> u128 {
    let host_bits = width.saturating_sub(len);
    all_ones(host_bits)
}

fn all_ones(bits: u8) -> u128 {
    if bits >= 128 {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    }
}

/// One IPv4 or IPv6 address as an unsigned integer.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Address {
    family: Family,
    value: u128,
}

impl Address {
    pub const fn v4(value: u32) -> Address {
        Address {
            family: Family::V4,
            value: value as u128,
        }
    }

    pub const fn v6(value: u128) -> Address {
        Address {
            family: Family::V6,
            value,
        }
    }

    /// Build an address of `family` from a raw value, dropping any bits above
    /// the family width.
    pub fn from_value(family: Family, value: u128) -> Address {
        Address {
            family,
            value: value & family.max_value(),
        }
    }

    /// Build an address from big-endian bytes: 4 for IPv4, 16 for IPv6.
    pub fn from_bytes(bytes: &[u8]) -> Result<Address, ParseError> {
        match bytes.len() {
            4 => {
                let mut octets = [0u8; 4];
                octets.copy_from_slice(bytes);
                Ok(Address::v4(u32::from_be_bytes(octets)))
            }
            16 => {
                let mut octets = [0u8; 16];
                octets.copy_from_slice(bytes);
                Ok(Address::v6(u128::from_be_bytes(octets)))
            }
            n => Err(ParseError::MalformedAddress(format!(
                "{} bytes {:02x?}",
                n, bytes
            ))),
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn width(&self) -> u8 {
        self.family.width()
    }

    pub fn value(&self) -> u128 {
        self.value
    }

    /// Clear every bit at position `>= len`, counted from the most significant bit.
    pub fn mask_to(&self, len: u8) -> Address {
        Address {
            family: self.family,
            value: self.value & get_cidr_mask(self.width(), len),
        }
    }

    /// Set every bit at position `>= len`: the last address of the `/len` network.
    pub fn broadcast(&self, len: u8) -> Address {
        Address {
            family: self.family,
            value: self.mask_to(len).value | host_mask(self.width(), len),
        }
    }

    /// Number of trailing zero bits, capped at the family width.
    ///
    /// This is the largest host-part size a block starting here can have.
    pub fn trailing_zero_bits(&self) -> u8 {
        if self.value == 0 {
            self.width()
        } else {
            (self.value.trailing_zeros() as u8).min(self.width())
        }
    }

    pub fn to_ip(&self) -> IpAddr {
        match self.family {
            Family::V4 => IpAddr::V4(Ipv4Addr::from(self.value as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(self.value)),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Address {
        Address::v4(u32::from(addr))
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Address {
        Address::v6(u128::from(addr))
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Address {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_ip())
    }
}
