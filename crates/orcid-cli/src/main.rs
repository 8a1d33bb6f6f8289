//! orcid - command line access to the ORCID public registry
//!
//! Looks up researcher profiles, their works and BibTeX citations, and
//! runs registry searches.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orcid_api::OrcidClient;

mod cmd;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "orcid")]
#[command(about = "Query the ORCID public registry")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./orcid.toml or ~/.config/orcid/config.toml)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Use the sandbox registry
    #[arg(long, global = true)]
    sandbox: bool,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
    /// Show a researcher profile
    Get(cmd::get::GetArgs),
    /// Search the registry
    Search(cmd::search::SearchArgs),
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    orcid_core::init_logging(false, cli.debug);

    let config = if let Some(path) = cli.config {
        Config::from_file(&path)?
    } else {
        Config::load()?
    };
    let client_config = config.client_config(cli.sandbox, cli.timeout);

    match cli.command {
        Command::Get(args) => {
            let client = OrcidClient::new(&client_config).context("Failed to build HTTP client")?;
            cmd::get::run(args, &client)
        }
        Command::Search(args) => {
            let client = OrcidClient::new(&client_config).context("Failed to build HTTP client")?;
            cmd::search::run(args, &client)
        }
        Command::Config => {
            let mut table = cmd::table(&["Setting", "Value"]);
            table.add_row(vec![
                "Environment",
                &format!("{:?}", client_config.environment),
            ]);
            table.add_row(vec!["Base URL", &client_config.base_url()]);
            table.add_row(vec![
                "Timeout",
                &format!("{}s", client_config.timeout.as_secs()),
            ]);
            table.add_row(vec![
                "Connect timeout",
                &format!("{}s", client_config.connect_timeout.as_secs()),
            ]);

            eprintln!("\n{table}");
            Ok(())
        }
    }
}
