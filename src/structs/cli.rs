use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "finops-review")]
#[clap(about = "Month-over-month cloud cost comparison and cost-increase review", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
