//! Inspect and check the networks contracts can be deployed to.
//!
//! - `show`: print the resolved configuration (credentials redacted)
//! - `compiler`: print the solc `settings` fragment
//! - `networks`: list networks with their signer and liveness status
//! - `check`: verify a network is usable, optionally against its RPC node

use clap::{Parser, Subcommand};
use deployer::{
    load_configuration,
    report::{check_network, network_statuses, render, OutputFormat},
};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deployer")]
#[command(about = "Resolve and inspect contract deployment networks")]
struct Cli {
    /// Env file read before resolving; the process environment takes precedence
    #[arg(long, env = "DEPLOYER_ENV_FILE", default_value = ".env")]
    env_file: PathBuf,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved configuration
    Show {
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Print the compiler settings as a solc standard-JSON fragment
    Compiler,

    /// List the configured networks
    Networks,

    /// Check that a network has everything a deployment needs
    Check {
        /// Network name
        network: String,

        /// Connect to the RPC node and verify its chain id
        #[arg(long)]
        connect: bool,
    },
}

fn init_logging(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    let config = load_configuration(&cli.env_file)?;

    match cli.command {
        Command::Show { format } => {
            println!("{}", render(&config, format)?);
        }
        Command::Compiler => {
            println!(
                "{}",
                serde_json::to_string_pretty(&config.compiler.solc_settings())?
            );
        }
        Command::Networks => {
            for status in network_statuses(&config) {
                println!("{}", status);
            }
        }
        Command::Check { network, connect } => {
            let network = config.select(&network)?;

            let defects = check_network(network);
            for defect in &defects {
                error!("{}", defect);
            }
            if !defects.is_empty() {
                eyre::bail!("Network {} is misconfigured", network.name);
            }

            if network.is_live {
                warn!(network = %network.name, "Network is live, transactions are irreversible");
            }

            if network.is_simulated() {
                info!(
                    network = %network.name,
                    chain_id = ?network.chain_id,
                    "Network runs in-process, nothing to connect to"
                );
            } else if connect {
                let provider = client::create_provider(network).await?;
                let chain_id = client::verify_chain_id(&provider, network).await?;
                let signer = client::signer_for(network)?;
                info!(
                    network = %network.name,
                    chain_id,
                    address = %signer.address(),
                    "Network reachable, signer ready"
                );
            }

            info!("Network {} is ready", network.name);
        }
    }

    Ok(())
}
