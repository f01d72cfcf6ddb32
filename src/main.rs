use std::io::Write;
use anyhow::Context;
use clap::Parser;
use finops_review::config::constants::DEFAULT_LOG_FILTER;
use finops_review::structs::cli::Cli;
use finops_review::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format(|buf, record| {
            if record.level() <= log::Level::Warn {
                writeln!(buf, "[{}] {}", record.level(), record.args())
            } else {
                writeln!(buf, "{}", record.args())
            }
        })
        .init();

    let cli = Cli::parse();
    let name = cli.command.name();

    CommandRunner::new()
        .run_command(cli.command)
        .await
        .with_context(|| format!("`finops-review {}` failed", name))
}
