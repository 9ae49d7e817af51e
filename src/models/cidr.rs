//! CIDR block: a base address plus prefix length.

use super::{Address, Family};
use crate::error::ParseError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// A network of one address family.
///
/// The base address always has its host bits cleared. Ordering is by
/// family, then base address, then prefix length, so at equal base the
/// larger network sorts first.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    base: Address,
    prefix_len: u8,
}

impl CidrBlock {
    /// Build the `/prefix_len` network containing `addr`.
    ///
    /// Every notation ends up here, so masking happens in one place.
    pub fn new(addr: Address, prefix_len: u8) -> Result<CidrBlock, ParseError> {
        if prefix_len > addr.width() {
            return Err(ParseError::MalformedCidr(format!("{addr}/{prefix_len}")));
        }
        Ok(CidrBlock {
            base: addr.mask_to(prefix_len),
            prefix_len,
        })
    }

    /// Single-address block.
    pub fn host(addr: Address) -> CidrBlock {
        CidrBlock {
            base: addr,
            prefix_len: addr.width(),
        }
    }

    pub fn family(&self) -> Family {
        self.base.family()
    }

    pub fn base(&self) -> Address {
        self.base
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Lowest (network) address.
    pub fn lo(&self) -> Address {
        self.base
    }

    /// Highest (broadcast) address.
    pub fn hi(&self) -> Address {
        self.base.broadcast(self.prefix_len)
    }

    /// True if every address of `other` is inside `self`.
    pub fn contains(&self, other: &CidrBlock) -> bool {
        self.prefix_len <= other.prefix_len && self.contains_addr(other.base)
    }

    pub fn contains_addr(&self, addr: Address) -> bool {
        addr.family() == self.family() && addr.mask_to(self.prefix_len) == self.base
    }

    /// True if `self` and `other` are the two halves of one parent block.
    ///
    /// A block is not its own sibling.
    pub fn is_sibling(&self, other: &CidrBlock) -> bool {
        if self.family() != other.family()
            || self.prefix_len != other.prefix_len
            || self.prefix_len == 0
            || self.base == other.base
        {
            return false;
        }
        let parent_len = self.prefix_len - 1;
        self.base.mask_to(parent_len) == other.base.mask_to(parent_len)
    }

    /// Enclosing block one bit shorter, `None` for a `/0`.
    pub fn parent(&self) -> Option<CidrBlock> {
        let parent_len = self.prefix_len.checked_sub(1)?;
        Some(CidrBlock {
            base: self.base.mask_to(parent_len),
            prefix_len: parent_len,
        })
    }

    /// Canonical `<address>/<prefix>` text.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix_len)
    }
}

/// Parses `addr/prefix` or a bare address; a bare address is a single host.
impl FromStr for CidrBlock {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<CidrBlock, ParseError> {
        let s = s.trim();
        let malformed = || ParseError::MalformedCidr(s.to_string());

        let (addr_str, prefix_str) = match s.split_once('/') {
            Some((addr, prefix)) => (addr, Some(prefix)),
            None => (s, None),
        };
        let addr: Address = addr_str
            .parse::<IpAddr>()
            .map_err(|_| malformed())?
            .into();
        let prefix_len = match prefix_str {
            None => addr.width(),
            Some(p) => {
                if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(malformed());
                }
                p.parse::<u8>().map_err(|_| malformed())?
            }
        };
        CidrBlock::new(addr, prefix_len).map_err(|_| malformed())
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::from_str(&s).map_err(de::Error::custom)
    }
}
