//! Domain models for the VPC network planner.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Cidr`] - IPv4 address block with CIDR notation support
//! - [`SubnetDescriptor`] - a derived subnet in one availability zone
//! - [`NetworkPlan`] - the resolved topology handed to a provisioning engine

mod cidr;
mod plan;
mod subnet;

// Re-export public types
pub use cidr::{broadcast_addr, network_addr, prefix_mask, Cidr, MAX_PREFIX};
pub use plan::{
    ElasticIpDescriptor, NatGatewayDescriptor, NetworkPlan, RouteTableAssociation,
    RouteTableDescriptor, RouteTableKind, PUBLIC_ROUTE_TABLE,
};
pub use subnet::{SubnetDescriptor, SubnetTier};
