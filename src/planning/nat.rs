//! NAT gateway topology.
//!
//! Resolves the NAT flags into gateway and private-route-table counts:
//!
//! | enable_nat | single_nat | gateways | private tables | private subnet routing |
//! |------------|------------|----------|----------------|------------------------|
//! | false      | any        | 0        | 0              | public route table     |
//! | true       | true       | 1        | 1              | shared table 0         |
//! | true       | false      | zones    | zones          | zone i -> table i      |

use crate::models::ElasticIpDescriptor;

/// How private subnet egress is arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NatMode {
    /// No NAT at all, private subnets fall back to the public route table.
    /// Escape hatch for cost-saving test topologies.
    Disabled,
    /// One shared NAT gateway in the first public subnet.
    Single,
    /// One NAT gateway per availability zone.
    PerZone,
}

/// Resolved NAT counts for a topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NatTopology {
    pub mode: NatMode,
    /// Number of NAT gateways to provision.
    pub gateway_count: usize,
    /// Number of private route tables to provision.
    pub private_route_table_count: usize,
}

impl NatTopology {
    /// The NAT gateway index a private subnet in `zone` routes through.
    /// `None` when NAT is disabled.
    pub fn gateway_for_zone(&self, zone: u8) -> Option<usize> {
        match self.mode {
            NatMode::Disabled => None,
            NatMode::Single => Some(0),
            NatMode::PerZone => Some(zone as usize),
        }
    }
}

/// Resolve the NAT flags per the decision table above.
pub fn plan_nat_topology(enable_nat: bool, single_nat: bool, zone_count: u8) -> NatTopology {
    let (mode, count) = match (enable_nat, single_nat) {
        (false, _) => (NatMode::Disabled, 0),
        (true, true) => (NatMode::Single, 1),
        (true, false) => (NatMode::PerZone, zone_count as usize),
    };
    log::debug!("NAT topology: mode {mode:?}, {count} gateway(s)");
    NatTopology {
        mode,
        gateway_count: count,
        private_route_table_count: count,
    }
}

/// Allocate one elastic IP placeholder per NAT gateway, 1:1 and in order.
pub fn assign_elastic_ips(gateway_count: usize) -> Vec<ElasticIpDescriptor> {
    (0..gateway_count)
        .map(|index| ElasticIpDescriptor { index })
        .collect()
}
