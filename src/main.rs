use clap::Parser;
use teamdraw_api::cli::{self, Cli, Command};
use teamdraw_api::config::AppConfig;
use teamdraw_api::infrastructure::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => cli::serve::run(config).await,
        Command::SeedTeams => cli::seed::run_teams(config).await,
        Command::SeedUser(args) => cli::seed::run_user(config, args).await,
        Command::Timer(args) => cli::timer::run(args).await,
    }
}
