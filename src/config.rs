//! Planner configuration from environment variables.
//!
//! Settings are read from the environment (a `.env` file is loaded by `main`
//! via dotenv before this runs). Every setting has a default matching the
//! reference two-zone topology, so an empty environment plans the standard
//! layout.

use crate::error::ConfigError;
use crate::models::Cidr;

/// Default VPC block for the reference topology.
pub const DEFAULT_VPC_CIDR: &str = "10.0.0.0/16";
/// Default availability zone count.
pub const DEFAULT_ZONE_COUNT: u8 = 2;

/// Inputs to the planner. Validated on load, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanConfig {
    /// The VPC CIDR block subnets are carved from.
    pub vpc_cidr: Cidr,
    /// Number of availability zones to spread subnets over.
    pub zone_count: u8,
    /// Whether private subnets get NAT egress at all.
    pub enable_nat: bool,
    /// One shared NAT gateway instead of one per zone.
    pub single_nat: bool,
}

impl Default for PlanConfig {
    fn default() -> Self {
        PlanConfig {
            vpc_cidr: Cidr::new(DEFAULT_VPC_CIDR).expect("default VPC CIDR must parse"),
            zone_count: DEFAULT_ZONE_COUNT,
            enable_nat: true,
            single_nat: false,
        }
    }
}

impl PlanConfig {
    /// Build a config from environment variables, falling back to defaults.
    ///
    /// Recognized variables: `VPC_CIDR`, `ZONE_COUNT`, `ENABLE_NAT`, `SINGLE_NAT`.
    pub fn from_env() -> Result<PlanConfig, ConfigError> {
        let defaults = PlanConfig::default();

        let vpc_cidr = match std::env::var("VPC_CIDR") {
            Ok(value) => Cidr::new(&value)?,
            Err(_) => defaults.vpc_cidr,
        };
        let zone_count = match std::env::var("ZONE_COUNT") {
            Ok(value) => value
                .trim()
                .parse::<u8>()
                .map_err(|e| ConfigError::InvalidSetting {
                    name: "ZONE_COUNT".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            Err(_) => defaults.zone_count,
        };
        let enable_nat = parse_bool_setting("ENABLE_NAT", defaults.enable_nat)?;
        let single_nat = parse_bool_setting("SINGLE_NAT", defaults.single_nat)?;

        let config = PlanConfig {
            vpc_cidr,
            zone_count,
            enable_nat,
            single_nat,
        };
        log::debug!("Loaded config from environment: {config:?}");
        Ok(config)
    }
}

/// Parse a boolean environment variable, accepting true/false/1/0/yes/no.
fn parse_bool_setting(name: &str, default: bool) -> Result<bool, ConfigError> {
    let value = match std::env::var(name) {
        Ok(v) => v,
        Err(_) => return Ok(default),
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidSetting {
            name: name.to_string(),
            value,
            reason: "expected true/false".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlanConfig::default();
        assert_eq!(config.vpc_cidr.to_string(), "10.0.0.0/16");
        assert_eq!(config.zone_count, 2);
        assert!(config.enable_nat);
        assert!(!config.single_nat);
    }

    #[test]
    fn test_parse_bool_setting_default() {
        // unset variable falls back to the default
        assert!(parse_bool_setting("NO_SUCH_PLANNER_SETTING", true).unwrap());
        assert!(!parse_bool_setting("NO_SUCH_PLANNER_SETTING", false).unwrap());
    }

    #[test]
    fn test_parse_bool_setting_values() {
        // env mutation is process-wide, keep it to one test
        std::env::set_var("PLANNER_TEST_BOOL", "YES");
        assert!(parse_bool_setting("PLANNER_TEST_BOOL", false).unwrap());

        std::env::set_var("PLANNER_TEST_BOOL", "0");
        assert!(!parse_bool_setting("PLANNER_TEST_BOOL", true).unwrap());

        std::env::set_var("PLANNER_TEST_BOOL", "maybe");
        assert!(matches!(
            parse_bool_setting("PLANNER_TEST_BOOL", true),
            Err(ConfigError::InvalidSetting { .. })
        ));
        std::env::remove_var("PLANNER_TEST_BOOL");
    }
}
