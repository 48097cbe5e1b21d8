#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::{ApiConfig, LoggingConfig, SimulatorConfig};

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "purchase-sim")]
#[command(about = "Client for the property purchase simulation service")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the simulation service (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate the inputs and run one simulation
    Simulate {
        /// Property value in reais
        #[arg(long, allow_hyphen_values = true)]
        property_value: String,

        /// Down payment percentage (5 to 20)
        #[arg(long, allow_hyphen_values = true)]
        down_payment: String,

        /// Contract duration in years (1 to 5)
        #[arg(long, allow_hyphen_values = true)]
        years: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether the simulation service is up
    Health,

    /// Run every scenario of a CSV file
    Batch {
        /// CSV with columns valor_imovel, percentual_entrada, anos_contrato
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the report (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
