//! Plan assembly.
//!
//! Pulls the subnet and NAT derivations together into a complete
//! [`NetworkPlan`]. Pure computation: same inputs, same plan, byte for byte.

use crate::config::PlanConfig;
use crate::error::ConfigError;
use crate::models::{
    NatGatewayDescriptor, NetworkPlan, RouteTableAssociation, RouteTableDescriptor, RouteTableKind,
    SubnetTier, PUBLIC_ROUTE_TABLE,
};
use crate::planning::nat::{assign_elastic_ips, plan_nat_topology, NatMode};
use crate::planning::subnets::{derive_private_subnets, derive_public_subnets, validate_zone_count};
use itertools::Itertools;

/// Compute the full network plan for a validated configuration.
///
/// Fails fast on any configuration error, never returning a partial plan.
///
/// # Arguments
/// * `config` - The planner inputs
///
/// # Returns
/// * `Ok(NetworkPlan)` - The resolved topology
pub fn compute_plan(config: &PlanConfig) -> Result<NetworkPlan, ConfigError> {
    log::info!(
        "#Start compute_plan() vpc {vpc} zones {zones} nat {nat} single {single}",
        vpc = config.vpc_cidr,
        zones = config.zone_count,
        nat = config.enable_nat,
        single = config.single_nat
    );

    validate_zone_count(config.zone_count)?;

    let public_subnets = derive_public_subnets(config.vpc_cidr, config.zone_count)?;
    let private_subnets = derive_private_subnets(config.vpc_cidr, config.zone_count)?;

    let nat = plan_nat_topology(config.enable_nat, config.single_nat, config.zone_count);
    let elastic_ips = assign_elastic_ips(nat.gateway_count);

    // Gateway i lives in public subnet 0 (single mode) or subnet i (per zone).
    let nat_gateways: Vec<NatGatewayDescriptor> = elastic_ips
        .into_iter()
        .map(|elastic_ip| NatGatewayDescriptor {
            public_subnet: match nat.mode {
                NatMode::Single => 0,
                _ => elastic_ip.index,
            },
            elastic_ip,
        })
        .collect();

    // The public route table is always index 0, private tables follow 1:1
    // behind their NAT gateway.
    let mut route_tables = vec![RouteTableDescriptor {
        kind: RouteTableKind::Public,
        nat_gateway: None,
    }];
    for gateway in 0..nat.private_route_table_count {
        route_tables.push(RouteTableDescriptor {
            kind: RouteTableKind::Private,
            nat_gateway: Some(gateway),
        });
    }

    let mut associations = Vec::new();
    for subnet in &public_subnets {
        associations.push(RouteTableAssociation {
            tier: SubnetTier::Public,
            zone: subnet.zone,
            route_table: PUBLIC_ROUTE_TABLE,
        });
    }
    for subnet in &private_subnets {
        let route_table = match nat.gateway_for_zone(subnet.zone) {
            // private tables start right after the public table
            Some(gateway) => PUBLIC_ROUTE_TABLE + 1 + gateway,
            None => PUBLIC_ROUTE_TABLE,
        };
        associations.push(RouteTableAssociation {
            tier: SubnetTier::Private,
            zone: subnet.zone,
            route_table,
        });
    }

    let plan = NetworkPlan {
        vpc_cidr: config.vpc_cidr,
        public_subnets,
        private_subnets,
        nat_gateways,
        route_tables,
        associations,
    };

    check_for_overlapping_subnets(&plan)?;

    log::info!(
        "Planned {pub_count} public + {priv_count} private subnets, {nat_count} NAT gateway(s), {rt_count} route table(s)",
        pub_count = plan.public_subnets.len(),
        priv_count = plan.private_subnets.len(),
        nat_count = plan.nat_gateways.len(),
        rt_count = plan.route_tables.len()
    );

    Ok(plan)
}

/// Verify that no two subnets in the plan share address space.
///
/// The slice offset scheme makes this impossible for validated inputs; the
/// check keeps a broken derivation from ever reaching a provisioning engine.
pub fn check_for_overlapping_subnets(plan: &NetworkPlan) -> Result<(), ConfigError> {
    for (a, b) in plan.all_subnets().tuple_combinations() {
        if a.cidr.overlaps(&b.cidr) {
            log::error!("Overlapping subnets in plan: {a} and {b}");
            return Err(ConfigError::OverlappingSubnets {
                first: a.to_string(),
                second: b.to_string(),
            });
        }
    }
    Ok(())
}
