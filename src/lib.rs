// cargo watch -x 'fmt' -x 'run'  // 'run -- --some-arg'

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod planning;

use config::PlanConfig;
use error::ConfigError;
use models::NetworkPlan;

/// Compute a plan from environment-provided configuration.
pub fn plan_from_env() -> Result<NetworkPlan, ConfigError> {
    let config = PlanConfig::from_env()?;
    planning::compute_plan(&config)
}

pub use planning::{check_for_overlapping_subnets, compute_plan};

#[cfg(test)]
mod tests {
    use super::*;
    use models::Cidr;

    #[test]
    fn test_plan_from_env_defaults() {
        // relies on the planner defaults when no env vars are set
        let plan = plan_from_env().expect("default config should plan");
        assert_eq!(plan.vpc_cidr, Cidr::new("10.0.0.0/16").unwrap());
        assert_eq!(plan.public_subnets.len(), plan.private_subnets.len());
    }
}
