//! Configuration error kind for the planner.
//!
//! Every invalid input is rejected with a [`ConfigError`] before any part of a
//! plan is produced. The planner never returns a partial plan.

use thiserror::Error;

/// Errors raised while validating planner inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The CIDR string could not be parsed as `a.b.c.d/len`.
    #[error("invalid CIDR '{input}': {reason}")]
    InvalidCidr { input: String, reason: String },

    /// A prefix length above 32 bits.
    #[error("prefix length /{prefix} exceeds the 32 bit maximum")]
    PrefixTooLong { prefix: u8 },

    /// The VPC block is too small to be subdivided into subnet slices.
    #[error("cannot carve /{subnet_prefix} subnets out of a /{vpc_prefix} block")]
    BlockTooSmall { vpc_prefix: u8, subnet_prefix: u8 },

    /// A slice index outside the subdivision range of the parent block.
    #[error("slice index {index} out of range, block has {slices} slices")]
    SliceOutOfRange { index: u32, slices: u32 },

    /// A zone count of zero plans nothing, reject it up front.
    #[error("zone count must be at least 1")]
    ZoneCountZero,

    /// The private-subnet slice offset only leaves room for 10 zones.
    #[error("zone count {got} exceeds the maximum of {max} supported by the private subnet offset")]
    ZoneCountTooLarge { got: u8, max: u8 },

    /// An environment variable held a value the planner could not interpret.
    #[error("invalid value '{value}' for setting {name}: {reason}")]
    InvalidSetting {
        name: String,
        value: String,
        reason: String,
    },

    /// Two derived subnets share address space. Indicates a broken derivation,
    /// surfaced rather than silently provisioned.
    #[error("overlapping subnets in plan: {first} and {second}")]
    OverlappingSubnets { first: String, second: String },
}
