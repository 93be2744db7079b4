//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::application::sample::gaming_computer;
use crate::application::ConfiguratorService;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{Component, Node};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "settings loaded");

    match &cli.command {
        Some(Commands::Validate {
            min_price,
            allow_minimum,
            tree,
        }) => _validate(settings, *min_price, *allow_minimum, *tree),
        Some(Commands::Price) => _price(),
        Some(Commands::Tree) => _tree(settings),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(&settings),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage("no command given, try --help".to_string())),
    }
}

fn sample_product() -> CliResult<Node> {
    Ok(Node::Assembly(gaming_computer()?))
}

#[instrument(level = "debug")]
fn _validate(
    mut settings: Settings,
    min_price: Option<Decimal>,
    allow_minimum: bool,
    tree: bool,
) -> CliResult<()> {
    if let Some(min_price) = min_price {
        settings.policy.minimum_price = min_price;
    }
    settings.policy.allow_minimum |= allow_minimum;
    settings.output.show_tree |= tree;

    let service = ConfiguratorService::new(settings);
    let product = sample_product()?;

    if service.settings().output.show_tree {
        output::info(&service.render(&product));
    }

    let verdict = service.check(&product);
    for line in verdict.lines() {
        output::info(&line);
    }

    if verdict.valid {
        Ok(())
    } else {
        Err(CliError::InvalidConfiguration {
            issues: verdict.issues.len(),
        })
    }
}

#[instrument(level = "debug")]
fn _price() -> CliResult<()> {
    let product = sample_product()?;
    output::info(&format!("{}: ${}", product.name(), product.calculate_price()));
    Ok(())
}

#[instrument(level = "debug")]
fn _tree(settings: Settings) -> CliResult<()> {
    let service = ConfiguratorService::new(settings);
    let product = sample_product()?;
    output::info(&service.render(&product));
    Ok(())
}

fn _config_show(settings: &Settings) -> CliResult<()> {
    output::header("# effective settings");
    output::info(&settings.to_toml()?);
    Ok(())
}

fn _config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::info(&path.display()),
        None => output::info("no config directory available on this platform"),
    }
    Ok(())
}
