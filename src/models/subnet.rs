//! Subnet descriptor model.

use super::Cidr;
use serde::{Deserialize, Serialize};

/// Whether a subnet fronts the internet or sits behind NAT.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SubnetTier {
    /// Routed to the internet gateway, hosts NAT gateways and load balancers.
    Public,
    /// No inbound reachability, egress only via NAT (when enabled).
    Private,
}

impl std::fmt::Display for SubnetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SubnetTier::Public => write!(f, "public"),
            SubnetTier::Private => write!(f, "private"),
        }
    }
}

/// A derived subnet placed in one availability zone.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetDescriptor {
    /// Availability zone index this subnet is placed in.
    pub zone: u8,
    /// CIDR block carved out of the VPC block.
    pub cidr: Cidr,
    /// Public or private tier.
    pub tier: SubnetTier,
}

impl std::fmt::Display for SubnetDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} subnet zone {} [{}]", self.tier, self.zone, self.cidr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_serde_form() {
        let tier = SubnetTier::Public;
        assert_eq!(serde_json::to_string(&tier).unwrap(), "\"public\"");
        let back: SubnetTier = serde_json::from_str("\"private\"").unwrap();
        assert_eq!(back, SubnetTier::Private);
    }

    #[test]
    fn test_display() {
        let subnet = SubnetDescriptor {
            zone: 1,
            cidr: Cidr::new("10.0.11.0/24").unwrap(),
            tier: SubnetTier::Private,
        };
        assert_eq!(subnet.to_string(), "private subnet zone 1 [10.0.11.0/24]");
    }
}
