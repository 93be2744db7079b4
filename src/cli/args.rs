//! CLI argument definitions using clap

use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use rust_decimal::Decimal;

/// Composite product configurator: price and validate part trees
#[derive(Parser, Debug)]
#[command(name = "prodconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, env = "PRODCONF_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the sample product and print the verdict
    Validate {
        /// Override the minimum acceptable price
        #[arg(long, value_parser = parse_decimal)]
        min_price: Option<Decimal>,
        /// Accept prices equal to the minimum
        #[arg(long)]
        allow_minimum: bool,
        /// Print the product tree first
        #[arg(long)]
        tree: bool,
    },

    /// Print the total price of the sample product
    Price,

    /// Show the sample product as a tree
    Tree,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show the global config file location
    Path,
}

fn parse_decimal(s: &str) -> Result<Decimal, String> {
    Decimal::from_str(s).map_err(|e| format!("invalid decimal '{}': {}", s, e))
}
