use clap::Parser;
use swapkeeper::adapter::inbound::cli::command::Cli;
use swapkeeper::adapter::inbound::cli::{dispatch, output};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = dispatch(cli).await {
        tracing::error!(error = %e, "Fatal error");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
