//! Terminal output for a computed plan.
//!
//! Prints the resolved topology as aligned, quoted columns so it can be eyed
//! in a terminal or pasted into a spreadsheet.

use crate::models::{NetworkPlan, RouteTableKind, SubnetDescriptor};
use colored::Colorize;
use std::error::Error;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Print the plan as a subnet table plus NAT gateway summary.
pub fn print_plan(plan: &NetworkPlan) -> Result<(), Box<dyn Error>> {
    log::info!(
        "#Start print_plan() vpc {} with {} subnets",
        plan.vpc_cidr,
        plan.public_subnets.len() + plan.private_subnets.len()
    );

    println!(
        "{} {}",
        "VPC:".bold(),
        plan.vpc_cidr.to_string().on_blue()
    );
    println!(
        r#" "tier",   "zone",     "subnet_cidr", "route_table", "nat_gateway""#
    );

    for subnet in plan.all_subnets() {
        print_subnet_row(plan, subnet);
    }

    if plan.nat_gateways.is_empty() {
        println!(
            "{} NAT disabled, private subnets use the public route table",
            "NOTE".on_red()
        );
    } else {
        for (i, gw) in plan.nat_gateways.iter().enumerate() {
            println!(
                "NAT gateway {i} in {subnet} with elastic IP {eip}",
                subnet = plan.public_subnets[gw.public_subnet].cidr,
                eip = gw.elastic_ip.index
            );
        }
    }

    Ok(())
}

/// Print a single subnet row with its route table association.
fn print_subnet_row(plan: &NetworkPlan, subnet: &SubnetDescriptor) {
    let association = plan
        .associations
        .iter()
        .find(|a| a.tier == subnet.tier && a.zone == subnet.zone);

    let (route_table, nat_gateway) = match association {
        Some(a) => {
            let table = &plan.route_tables[a.route_table];
            let table_name = match table.kind {
                RouteTableKind::Public => "public".to_string(),
                RouteTableKind::Private => format!("private-{}", a.route_table - 1),
            };
            let nat = table
                .nat_gateway
                .map(|g| format!("nat-{g}"))
                .unwrap_or_else(|| "None".to_string());
            (table_name, nat)
        }
        None => {
            log::warn!("Warning: no route table association for {subnet}");
            ("None".to_string(), "None".to_string())
        }
    };

    println!(
        "{tier},{zone},{cidr},{route_table},{nat_gateway}",
        tier = format_field(subnet.tier, 9),
        zone = format_field(subnet.zone, 7),
        cidr = format_field(subnet.cidr, 18),
        route_table = format_field(route_table, 14),
        nat_gateway = format_field(nat_gateway, 14),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlanConfig;
    use crate::planning::compute_plan;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_print_plan_runs() {
        let plan = compute_plan(&PlanConfig::default()).unwrap();
        print_plan(&plan).expect("print_plan should not fail");
    }
}
