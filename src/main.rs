use clap::Parser;
use restock::adapter::inbound::cli::command::{CheckCommand, Cli, Commands};
use restock::adapter::inbound::cli::output::{self, OutputConfig};
use restock::adapter::inbound::cli::{available, check, once, run};
use restock::error::Result;
use restock::infrastructure::config::settings::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!(
                "Failed to load config {}: {e}",
                cli.config.display()
            ));
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "restock starting");

    if let Err(e) = dispatch(&cli, &config).await {
        error!(kind = e.kind(), error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }

    info!("restock stopped");
}

async fn dispatch(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Commands::Run => run::execute(config).await,
        Commands::Once => once::execute(config).await,
        Commands::Available => available::execute(config).await,
        Commands::Check(CheckCommand::Config) => {
            check::config::execute_config(&cli.config, config);
            Ok(())
        }
        Commands::Check(CheckCommand::Telegram) => {
            check::telegram::execute_telegram(config).await
        }
    }
}
