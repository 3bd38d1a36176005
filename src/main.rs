use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tax_regime_engine::api::{AppState, create_router};
use tax_regime_engine::cmd::{CompareCommand, load_config};

/// Compare Indian income-tax liability under the Old and New Regimes
#[derive(Parser, Debug)]
#[command(name = "tax-regime-engine", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API
    Serve(ServeCommand),
    /// Compare both regimes for the inputs in a JSON file
    Compare(CompareCommand),
}

#[derive(Args, Debug)]
struct ServeCommand {
    /// Directory holding fiscal_year.yaml, old_regime.yaml and new_regime.yaml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    addr: SocketAddr,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

impl ServeCommand {
    async fn exec(&self) -> Result<(), Box<dyn Error>> {
        let state = AppState::new(load_config(self.config.as_deref())?);
        let router = create_router(state);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        info!(addr = %self.addr, "Listening");
        axum::serve(listener, router).await?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let cli = Cli::parse();
    match &cli.command {
        Command::Serve(cmd) => cmd.exec().await,
        Command::Compare(cmd) => {
            cmd.exec()?;
            Ok(())
        }
    }
}
