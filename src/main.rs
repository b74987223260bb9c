//! Amorce discovery command line
//!
//! Runs the discovery tools from a terminal, printing exactly the text an
//! agent would receive.

use amorce_discovery::config::DiscoveryConfig;
use amorce_discovery::observability::{init_default_logging, level_from_verbosity};
use amorce_discovery::tools::{build_tools_with_config, ToolDescription};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info};

/// Search and inspect agents registered with the Amorce trust API
#[derive(Parser)]
#[command(name = "amorce-discover")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Trust API base URL, overrides the configuration file
    #[arg(long, env = "AMORCE_TRUST_URL", value_name = "URL")]
    trust_url: Option<String>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for agents able to handle a task
    Search {
        /// Natural language description of what you need
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Show details of one agent
    Get {
        /// Agent id from search results
        agent_id: String,
    },
    /// Print the tool descriptions offered to an LLM
    Tools,
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_default_logging(level_from_verbosity(cli.verbose));

    let config = match load_configuration(cli.config.as_deref()) {
        Ok(config) => config.with_trust_url(cli.trust_url.as_deref()),
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };
    info!(trust_url = %config.trust_url, "Using trust API");

    let result = match cli.command {
        Commands::Search { query } => run_tool(&config, "search_agents", &query.join(" ")).await,
        Commands::Get { agent_id } => run_tool(&config, "get_agent", &agent_id).await,
        Commands::Tools => print_tools(&config),
        Commands::Config => print_config(&config),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_configuration(
    config_path: Option<&Path>,
) -> Result<DiscoveryConfig, Box<dyn std::error::Error>> {
    match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Ok(DiscoveryConfig::load_from_file(path)?)
        }
        None => {
            let default_path = Path::new("amorce.toml");
            if default_path.exists() {
                info!("Loading configuration from: {}", default_path.display());
                return Ok(DiscoveryConfig::load_from_file(default_path)?);
            }
            Ok(DiscoveryConfig::default())
        }
    }
}

async fn run_tool(
    config: &DiscoveryConfig,
    tool_name: &str,
    input: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let tools = build_tools_with_config(config);
    let tool = tools
        .iter()
        .find(|tool| tool.name() == tool_name)
        .ok_or_else(|| format!("Unknown tool: {tool_name}"))?;

    let output = tool.arun(input).await;
    println!("{output}");

    if output.is_failure() {
        return Err(format!("{tool_name} did not succeed").into());
    }
    Ok(())
}

fn print_tools(config: &DiscoveryConfig) -> Result<(), Box<dyn std::error::Error>> {
    let descriptions: Vec<ToolDescription> = build_tools_with_config(config)
        .iter()
        .map(|tool| tool.describe())
        .collect();
    println!("{}", serde_json::to_string_pretty(&descriptions)?);
    Ok(())
}

fn print_config(config: &DiscoveryConfig) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
