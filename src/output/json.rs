//! JSON persistence for computed plans.
//!
//! Writes the plan to a dated file (or an explicit path) so a provisioning
//! engine can pick it up, and reads plans back for inspection.

use crate::models::NetworkPlan;
use std::error::Error;
use std::path::Path;

/// Serialize the plan to a JSON file.
///
/// # Arguments
/// * `plan` - The plan to write
/// * `plan_file` - Optional target path. If None, uses default dated naming.
///
/// # Returns
/// * `Ok(String)` - The path the plan was written to
pub fn write_plan_file(
    plan: &NetworkPlan,
    plan_file: Option<&str>,
) -> Result<String, Box<dyn Error>> {
    let plan_file = match plan_file {
        Some(file) => file.to_string(),
        None => format!("network_plan_{}.json", chrono::Utc::now().format("%Y-%m-%d")),
    };

    let json =
        serde_json::to_string_pretty(plan).map_err(|e| format!("Error serializing plan: {e}"))?;
    log::info!("Writing plan to file: {plan_file}");
    std::fs::write(&plan_file, json)
        .map_err(|e| format!("Error writing plan file {plan_file}: {e}"))?;

    Ok(plan_file)
}

/// Read a previously written plan back from a JSON file.
pub fn read_plan_file(plan_file: &str) -> Result<NetworkPlan, Box<dyn Error>> {
    if !Path::new(plan_file).exists() {
        return Err(format!("Plan file does not exist: {plan_file}").into());
    }
    log::info!("Reading plan from file: {plan_file}");
    let json = std::fs::read_to_string(plan_file)?;
    let plan =
        serde_json::from_str(&json).map_err(|e| format!("Error parsing plan JSON: {e}"))?;
    Ok(plan)
}
