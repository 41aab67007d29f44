//! IPv4 CIDR block utilities.
//!
//! Provides the [`Cidr`] struct for representing IPv4 address blocks in CIDR
//! notation, along with the subdivision math the planner is built on.

use crate::error::ConfigError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_PREFIX: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use aws_vpc_planner::models::prefix_mask;
/// assert_eq!(prefix_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_mask(prefix: u8) -> Result<u32, ConfigError> {
    if prefix > MAX_PREFIX {
        Err(ConfigError::PrefixTooLong { prefix })
    } else {
        let right_len = MAX_PREFIX - prefix;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Addr, ConfigError> {
    if prefix > MAX_PREFIX {
        Err(ConfigError::PrefixTooLong { prefix })
    } else {
        let right_len = MAX_PREFIX - prefix;
        let bits = u32::from(addr) as u64;
        let new_bits = (bits >> right_len) << right_len;

        Ok(Ipv4Addr::from(new_bits as u32))
    }
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Addr, ConfigError> {
    if prefix > MAX_PREFIX {
        Err(ConfigError::PrefixTooLong { prefix })
    } else {
        let mask = prefix_mask(prefix)?;
        let addr_bits = u32::from(addr);
        let network_bits = addr_bits & mask;
        let broadcast_bits = network_bits | (!mask);
        Ok(Ipv4Addr::from(broadcast_bits))
    }
}

/// IPv4 address block in CIDR notation.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The network address of the block.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(|e| de::Error::custom(format!("{e}")))
    }
}

impl Cidr {
    /// Create a new [`Cidr`] from a CIDR string (e.g., "10.0.0.0/16").
    pub fn new(addr_cidr: &str) -> Result<Cidr, ConfigError> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(ConfigError::InvalidCidr {
                input: addr_cidr.to_string(),
                reason: "expected address/prefix".to_string(),
            });
        }
        let addr = Ipv4Addr::from_str(parts[0]).map_err(|_| ConfigError::InvalidCidr {
            input: addr_cidr.to_string(),
            reason: format!("invalid IP address: {}", parts[0]),
        })?;
        let prefix = u8::from_str(parts[1]).map_err(|_| ConfigError::InvalidCidr {
            input: addr_cidr.to_string(),
            reason: format!("invalid prefix length: {}", parts[1]),
        })?;
        if prefix > MAX_PREFIX {
            return Err(ConfigError::PrefixTooLong { prefix });
        }
        Ok(Cidr { addr, prefix })
    }

    /// Subdivide this block into `2^extra_bits` equal parts and return part `index`.
    ///
    /// This is the allocation primitive behind subnet derivation: the planner
    /// always slices a VPC block with `extra_bits = 8` (256 parts), so a /16
    /// yields /24 subnets.
    ///
    /// # Examples
    /// ```
    /// use aws_vpc_planner::models::Cidr;
    /// let vpc = Cidr::new("10.0.0.0/16").unwrap();
    /// assert_eq!(vpc.slice_block(8, 0).unwrap(), Cidr::new("10.0.0.0/24").unwrap());
    /// assert_eq!(vpc.slice_block(8, 11).unwrap(), Cidr::new("10.0.11.0/24").unwrap());
    /// ```
    pub fn slice_block(&self, extra_bits: u8, index: u32) -> Result<Cidr, ConfigError> {
        let new_prefix = self.prefix.saturating_add(extra_bits);
        if new_prefix > MAX_PREFIX {
            return Err(ConfigError::BlockTooSmall {
                vpc_prefix: self.prefix,
                subnet_prefix: new_prefix,
            });
        }
        let slices = 1u64 << extra_bits;
        if u64::from(index) >= slices {
            return Err(ConfigError::SliceOutOfRange {
                index,
                slices: slices as u32,
            });
        }
        let slice_size: u32 = 1 << (MAX_PREFIX - new_prefix);
        let base = u32::from(self.lo());
        // index < slices keeps this inside the parent block, no overflow possible
        let addr = Ipv4Addr::from(base + index * slice_size);
        Ok(Cidr {
            addr,
            prefix: new_prefix,
        })
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.prefix)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address: {e}"))
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        network_addr(self.addr, self.prefix)
            .unwrap_or_else(|e| panic!("Error calculating network address for {self}: {e}"))
    }

    /// Check if an IP address is contained within this block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }

    /// Check if two blocks share any address space.
    pub fn overlaps(&self, other: &Cidr) -> bool {
        self.lo() <= other.hi() && other.lo() <= self.hi()
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_mask() {
        assert_eq!(prefix_mask(0).unwrap(), 0x00000000);
        assert_eq!(prefix_mask(8).unwrap(), 0xFF000000);
        assert_eq!(prefix_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(prefix_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(prefix_mask(32).unwrap(), 0xFFFFFFFF);

        assert!(prefix_mask(33).is_err());
    }

    #[test]
    fn test_network_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(network_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(network_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(network_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(
            network_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 42)
        );

        assert!(network_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 8).unwrap(),
            Ipv4Addr::new(192, 255, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
    }

    #[test]
    fn test_cidr_new() {
        let cidr = Cidr::new("10.0.0.0/16").unwrap();
        assert_eq!(cidr.addr, Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(cidr.prefix, 16);

        // whitespace tolerated
        assert!(Cidr::new(" 10.0.0.0/16 ").is_ok());

        assert!(matches!(
            Cidr::new("10.0.0.0"),
            Err(ConfigError::InvalidCidr { .. })
        ));
        assert!(matches!(
            Cidr::new("10.0.0/16"),
            Err(ConfigError::InvalidCidr { .. })
        ));
        assert!(matches!(
            Cidr::new("10.0.0.0/abc"),
            Err(ConfigError::InvalidCidr { .. })
        ));
        assert!(matches!(
            Cidr::new("10.0.0.0/33"),
            Err(ConfigError::PrefixTooLong { prefix: 33 })
        ));
    }

    #[test]
    fn test_slice_block() {
        let vpc = Cidr::new("10.0.0.0/16").unwrap();
        assert_eq!(
            vpc.slice_block(8, 0).unwrap(),
            Cidr::new("10.0.0.0/24").unwrap()
        );
        assert_eq!(
            vpc.slice_block(8, 1).unwrap(),
            Cidr::new("10.0.1.0/24").unwrap()
        );
        assert_eq!(
            vpc.slice_block(8, 10).unwrap(),
            Cidr::new("10.0.10.0/24").unwrap()
        );
        assert_eq!(
            vpc.slice_block(8, 255).unwrap(),
            Cidr::new("10.0.255.0/24").unwrap()
        );

        assert!(matches!(
            vpc.slice_block(8, 256),
            Err(ConfigError::SliceOutOfRange { .. })
        ));

        // /26 + 8 bits would need a /34
        let small = Cidr::new("192.168.0.0/26").unwrap();
        assert!(matches!(
            small.slice_block(8, 0),
            Err(ConfigError::BlockTooSmall { .. })
        ));
    }

    #[test]
    fn test_slice_block_unaligned_parent() {
        // parent addr not on its network boundary, slicing starts from lo()
        let vpc = Cidr {
            addr: Ipv4Addr::new(10, 0, 3, 7),
            prefix: 16,
        };
        assert_eq!(
            vpc.slice_block(8, 0).unwrap(),
            Cidr::new("10.0.0.0/24").unwrap()
        );
    }

    #[test]
    fn test_contains() {
        let cidr = Cidr::new("10.0.10.0/24").unwrap();
        assert!(cidr.contains(Ipv4Addr::new(10, 0, 10, 0)));
        assert!(cidr.contains(Ipv4Addr::new(10, 0, 10, 255)));
        assert!(!cidr.contains(Ipv4Addr::new(10, 0, 11, 0)));
        assert!(!cidr.contains(Ipv4Addr::new(10, 0, 9, 255)));
    }

    #[test]
    fn test_overlaps() {
        let a = Cidr::new("10.0.0.0/24").unwrap();
        let b = Cidr::new("10.0.1.0/24").unwrap();
        let parent = Cidr::new("10.0.0.0/16").unwrap();

        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(parent.overlaps(&a));
        assert!(a.overlaps(&parent));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_serde_round_trip() {
        let cidr = Cidr::new("10.0.0.0/16").unwrap();
        let json = serde_json::to_string(&cidr).unwrap();
        assert_eq!(json, "\"10.0.0.0/16\"");
        let back: Cidr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cidr);

        let bad: Result<Cidr, _> = serde_json::from_str("\"10.0.0.0\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_cidr_cmp() {
        let a = Cidr::new("10.0.0.0/24").unwrap();
        let b = Cidr::new("10.0.1.0/24").unwrap();
        let c = Cidr::new("10.0.0.0/24").unwrap();

        assert!(a < b);
        assert!(a == c);
        assert!(b > a);
    }
}
