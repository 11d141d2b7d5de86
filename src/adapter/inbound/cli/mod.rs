//! CLI module graph and dispatch.

pub mod check;
pub mod command;
pub mod orders;
pub mod output;
pub mod run;
pub mod wallet;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use command::{CheckCommand, Cli, Commands, OrdersCommand, WalletCommand};

/// Load configuration and apply global CLI overrides.
#[allow(clippy::result_large_err)]
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(&cli.config)?;
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.json_logs {
        config.logging.format = "json".to_string();
    }
    Ok(config)
}

/// Run the parsed command.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Run(args) => run::execute_run(&cli, args).await,
        Commands::Evaluate(args) => run::execute_evaluate(&cli, args).await,
        Commands::Execute(args) => run::execute_listed(&cli, args).await,
        Commands::Orders(OrdersCommand::List(args)) => orders::execute_list(&cli, args).await,
        Commands::Orders(OrdersCommand::Show { id }) => orders::execute_show(&cli, *id).await,
        Commands::Orders(OrdersCommand::Create(args)) => orders::execute_create(&cli, args).await,
        Commands::Orders(OrdersCommand::Cancel { id }) => orders::execute_cancel(&cli, *id).await,
        Commands::Wallet(WalletCommand::Address) => wallet::execute_address(&cli),
        Commands::Wallet(WalletCommand::Sign { message }) => {
            wallet::execute_sign(&cli, message).await
        }
        Commands::Check(CheckCommand::Config) => check::execute_config(&cli),
    }
}
