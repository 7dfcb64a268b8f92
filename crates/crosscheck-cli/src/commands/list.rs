//! List command
//!
//! Usage: crosscheck list [--files]

use clap::Args;
use crosscheck_engine::Category;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Also show the scenario and report file names
    #[arg(long)]
    pub files: bool,
}

pub fn execute(args: ListArgs) -> anyhow::Result<()> {
    for (index, category) in Category::ALL.iter().enumerate() {
        if args.files {
            let scenario_file = if category.reads_scenario_file() {
                category.scenario_file()
            } else {
                "-".to_string()
            };
            println!(
                "{:>2}  {:<40} {:<20} {:<36} {}",
                index + 1,
                category.name(),
                category.operation(),
                scenario_file,
                category.report_file()
            );
        } else {
            println!("{:>2}  {:<40} {}", index + 1, category.name(), category.operation());
        }
    }
    Ok(())
}
