use aws_vpc_planner::config::PlanConfig;
use aws_vpc_planner::output::{print_plan, write_plan_file};
use aws_vpc_planner::planning::compute_plan;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let config = PlanConfig::from_env()?;
    let plan = compute_plan(&config)?;

    print_plan(&plan)?;
    let plan_file = write_plan_file(&plan, None)?;
    log::info!("Plan written to {plan_file}");

    Ok(())
}
