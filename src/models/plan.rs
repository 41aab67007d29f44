//! Resolved network plan model.
//!
//! A [`NetworkPlan`] is the immutable output of the planner: the full set of
//! subnets, NAT gateways, route tables and associations an external
//! provisioning engine needs to materialize the topology. Everything is held
//! in `Vec`s so that identical inputs serialize to byte-identical JSON.

use super::{Cidr, SubnetDescriptor, SubnetTier};
use serde::{Deserialize, Serialize};

/// Elastic IP placeholder, allocated 1:1 per NAT gateway.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElasticIpDescriptor {
    /// Allocation index, matches the NAT gateway index.
    pub index: usize,
}

/// A NAT gateway placed in one public subnet.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NatGatewayDescriptor {
    /// Index into the plan's public subnet list.
    pub public_subnet: usize,
    /// The elastic IP allocated for this gateway.
    pub elastic_ip: ElasticIpDescriptor,
}

/// Route table kind.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RouteTableKind {
    /// Default route to the internet gateway.
    Public,
    /// Default route to a NAT gateway (or nowhere when NAT is disabled).
    Private,
}

/// A route table and, for private tables, the NAT gateway it routes through.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTableDescriptor {
    pub kind: RouteTableKind,
    /// Index into the plan's NAT gateway list. Always `None` for public tables.
    pub nat_gateway: Option<usize>,
}

/// Association of one subnet to one route table.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTableAssociation {
    /// Tier of the associated subnet.
    pub tier: SubnetTier,
    /// Zone index of the associated subnet.
    pub zone: u8,
    /// Index into the plan's route table list.
    pub route_table: usize,
}

/// The resolved topology, computed once from inputs and never patched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkPlan {
    /// The VPC CIDR block all subnets are carved from.
    pub vpc_cidr: Cidr,
    /// Public subnets, one per zone, ordered by zone.
    pub public_subnets: Vec<SubnetDescriptor>,
    /// Private subnets, one per zone, ordered by zone.
    pub private_subnets: Vec<SubnetDescriptor>,
    /// NAT gateways (0, 1, or one per zone).
    pub nat_gateways: Vec<NatGatewayDescriptor>,
    /// Route tables. The public table is always index 0.
    pub route_tables: Vec<RouteTableDescriptor>,
    /// Subnet to route table associations.
    pub associations: Vec<RouteTableAssociation>,
}

/// Index of the public route table, present in every plan.
pub const PUBLIC_ROUTE_TABLE: usize = 0;

impl NetworkPlan {
    /// All subnets of both tiers, publics first, ordered by zone.
    pub fn all_subnets(&self) -> impl Iterator<Item = &SubnetDescriptor> + Clone {
        self.public_subnets.iter().chain(self.private_subnets.iter())
    }

    /// Look up the route table associated with a subnet.
    pub fn route_table_for(&self, tier: SubnetTier, zone: u8) -> Option<&RouteTableDescriptor> {
        self.associations
            .iter()
            .find(|a| a.tier == tier && a.zone == zone)
            .map(|a| &self.route_tables[a.route_table])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> NetworkPlan {
        NetworkPlan {
            vpc_cidr: Cidr::new("10.0.0.0/16").unwrap(),
            public_subnets: vec![SubnetDescriptor {
                zone: 0,
                cidr: Cidr::new("10.0.0.0/24").unwrap(),
                tier: SubnetTier::Public,
            }],
            private_subnets: vec![SubnetDescriptor {
                zone: 0,
                cidr: Cidr::new("10.0.10.0/24").unwrap(),
                tier: SubnetTier::Private,
            }],
            nat_gateways: vec![NatGatewayDescriptor {
                public_subnet: 0,
                elastic_ip: ElasticIpDescriptor { index: 0 },
            }],
            route_tables: vec![
                RouteTableDescriptor {
                    kind: RouteTableKind::Public,
                    nat_gateway: None,
                },
                RouteTableDescriptor {
                    kind: RouteTableKind::Private,
                    nat_gateway: Some(0),
                },
            ],
            associations: vec![
                RouteTableAssociation {
                    tier: SubnetTier::Public,
                    zone: 0,
                    route_table: PUBLIC_ROUTE_TABLE,
                },
                RouteTableAssociation {
                    tier: SubnetTier::Private,
                    zone: 0,
                    route_table: 1,
                },
            ],
        }
    }

    #[test]
    fn test_all_subnets_order() {
        let plan = sample_plan();
        let cidrs: Vec<String> = plan.all_subnets().map(|s| s.cidr.to_string()).collect();
        assert_eq!(cidrs, vec!["10.0.0.0/24", "10.0.10.0/24"]);
    }

    #[test]
    fn test_route_table_for() {
        let plan = sample_plan();

        let public = plan.route_table_for(SubnetTier::Public, 0).unwrap();
        assert_eq!(public.kind, RouteTableKind::Public);
        assert_eq!(public.nat_gateway, None);

        let private = plan.route_table_for(SubnetTier::Private, 0).unwrap();
        assert_eq!(private.kind, RouteTableKind::Private);
        assert_eq!(private.nat_gateway, Some(0));

        assert!(plan.route_table_for(SubnetTier::Public, 7).is_none());
    }

    #[test]
    fn test_plan_serde_round_trip() {
        let plan = sample_plan();
        let json = serde_json::to_string(&plan).unwrap();
        let back: NetworkPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
