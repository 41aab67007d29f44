//! Subnet derivation.
//!
//! Carves per-zone subnets out of the VPC block. The block is subdivided into
//! 256 equal slices (8 extra prefix bits); public subnets take slices
//! `0..zone_count`, private subnets take slices `10..10 + zone_count`. The
//! offset keeps the two tiers disjoint for up to [`MAX_ZONE_COUNT`] zones, and
//! anything beyond that is rejected instead of silently overlapping.

use crate::error::ConfigError;
use crate::models::{Cidr, SubnetDescriptor, SubnetTier};

/// Extra prefix bits per subnet slice: a /16 VPC yields /24 subnets.
pub const SUBNET_SLICE_BITS: u8 = 8;
/// Slice offset of the private tier relative to the public tier.
pub const PRIVATE_SLICE_OFFSET: u32 = 10;
/// Maximum zone count the slice offset scheme supports.
pub const MAX_ZONE_COUNT: u8 = PRIVATE_SLICE_OFFSET as u8;

/// Check a zone count against the limits of the slice offset scheme.
pub fn validate_zone_count(zone_count: u8) -> Result<(), ConfigError> {
    if zone_count == 0 {
        return Err(ConfigError::ZoneCountZero);
    }
    if zone_count > MAX_ZONE_COUNT {
        return Err(ConfigError::ZoneCountTooLarge {
            got: zone_count,
            max: MAX_ZONE_COUNT,
        });
    }
    Ok(())
}

/// Derive the public subnets, one per zone, slice `i` for zone `i`.
///
/// # Arguments
/// * `vpc_cidr` - The VPC block to carve subnets from
/// * `zone_count` - Number of availability zones, 1 to [`MAX_ZONE_COUNT`]
///
/// # Returns
/// * `Ok(Vec<SubnetDescriptor>)` - One subnet per zone, ordered by zone
pub fn derive_public_subnets(
    vpc_cidr: Cidr,
    zone_count: u8,
) -> Result<Vec<SubnetDescriptor>, ConfigError> {
    validate_zone_count(zone_count)?;
    derive_tier(vpc_cidr, zone_count, SubnetTier::Public, 0)
}

/// Derive the private subnets, one per zone, slice `i + 10` for zone `i`.
///
/// The `+10` offset guarantees disjointness from the public slices as long as
/// `zone_count <= 10`; larger counts are a [`ConfigError`].
pub fn derive_private_subnets(
    vpc_cidr: Cidr,
    zone_count: u8,
) -> Result<Vec<SubnetDescriptor>, ConfigError> {
    validate_zone_count(zone_count)?;
    derive_tier(vpc_cidr, zone_count, SubnetTier::Private, PRIVATE_SLICE_OFFSET)
}

fn derive_tier(
    vpc_cidr: Cidr,
    zone_count: u8,
    tier: SubnetTier,
    slice_offset: u32,
) -> Result<Vec<SubnetDescriptor>, ConfigError> {
    let mut subnets = Vec::with_capacity(zone_count as usize);
    for zone in 0..zone_count {
        let cidr = vpc_cidr.slice_block(SUBNET_SLICE_BITS, slice_offset + u32::from(zone))?;
        subnets.push(SubnetDescriptor { zone, cidr, tier });
    }
    log::debug!(
        "Derived {count} {tier} subnets from {vpc_cidr} at slice offset {slice_offset}",
        count = subnets.len()
    );
    Ok(subnets)
}
