//! wirebox - Entry Point
//!
//! Builds a container from configuration and resolves keys from the command
//! line.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `wirebox --list-types` | Print the linked catalog |
//! | `wirebox -c wirebox.toml` | Load `[bindings]` and print the registry |
//! | `wirebox -c wirebox.toml -r car` | Also resolve `car` |

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use wirebox::demo;
use wirebox::infrastructure::ContainerFactory;
use wirebox::infrastructure::config::ConfigLoader;
use wirebox::infrastructure::logging::init_logging;

/// Command line interface for wirebox
#[derive(Parser, Debug)]
#[command(name = "wirebox")]
#[command(about = "wirebox - Named bindings with constructor autowiring")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the types known to the linked catalog and exit
    #[arg(long)]
    pub list_types: bool,

    /// Key to resolve after loading; repeatable
    #[arg(short, long = "resolve", value_name = "KEY")]
    pub resolve: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let catalog = demo::linked_catalog();
    if cli.list_types {
        print!("{}", catalog.available());
        return Ok(());
    }

    let (container, report) = ContainerFactory::create(&config, catalog)?;
    for skipped in &report.skipped {
        println!("Skipped {}: {}", skipped.entry, skipped.reason);
    }

    println!("Bindings:");
    for (key, target) in container.view() {
        let type_name = target.type_name().unwrap_or("<factory>");
        println!("  {key} -> {type_name} ({})", target.kind());
    }

    for key in &cli.resolve {
        let object = container
            .resolve(key)
            .with_context(|| format!("Failed to resolve '{key}'"))?;
        info!(key = %key, type_name = object.type_name(), "Resolved");
        println!("{key} => {object:?}");
    }

    Ok(())
}
