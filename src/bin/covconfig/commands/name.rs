//! `covconfig name` command

use anyhow::Result;
use covconfig::core::SolutionConfigurationPair;
use covconfig::resolver::solution_configuration_name;

use crate::cli::NameArgs;

pub fn execute(args: NameArgs) -> Result<i32> {
    let pair = SolutionConfigurationPair::new(args.configuration, args.platform);
    println!("{}", solution_configuration_name(&pair));
    Ok(0)
}
