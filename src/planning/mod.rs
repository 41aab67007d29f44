//! Network topology planning logic.
//!
//! This module contains the pure planning computations:
//! - [`subnets`] - Per-zone subnet derivation from the VPC block
//! - [`nat`] - NAT gateway and elastic IP topology
//! - [`planner`] - Assembly of the complete [`crate::models::NetworkPlan`]

mod nat;
mod planner;
mod subnets;

// Re-export public functions
pub use nat::{assign_elastic_ips, plan_nat_topology, NatMode, NatTopology};
pub use planner::{check_for_overlapping_subnets, compute_plan};
pub use subnets::{
    derive_private_subnets, derive_public_subnets, validate_zone_count, MAX_ZONE_COUNT,
    PRIVATE_SLICE_OFFSET, SUBNET_SLICE_BITS,
};
