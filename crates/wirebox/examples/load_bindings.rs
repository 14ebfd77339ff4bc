//! Bulk loading in lenient and strict mode
//!
//! ```bash
//! cargo run -p wirebox --example load_bindings
//! ```

use anyhow::Result;
use wirebox::demo;
use wirebox::infrastructure::config::{ContainerConfig, LoadMode};
use wirebox::{Container, LoadEntry};

fn entries() -> Vec<LoadEntry> {
    vec![
        LoadEntry::keyed("Color", "Color"),
        LoadEntry::keyed("Car", "Car"),
        LoadEntry::absent(Some("nothing".to_string())),
        LoadEntry::keyed("Boat", "Boat"),
    ]
}

fn main() -> Result<()> {
    println!("wirebox - Bulk Loading");
    println!("======================");

    let mut lenient = Container::new(demo::linked_catalog());
    let report = lenient.load(entries())?;
    println!("Lenient: registered {:?}", report.registered);
    for skipped in &report.skipped {
        println!("  skipped {}: {}", skipped.entry, skipped.reason);
    }

    let strict_config = ContainerConfig {
        load_mode: LoadMode::Strict,
        ..ContainerConfig::default()
    };
    let mut strict = Container::with_config(demo::linked_catalog(), strict_config);
    match strict.load(entries()) {
        Ok(report) => println!("Strict: registered {:?}", report.registered),
        Err(error) => println!("Strict: {error} ({} bindings)", strict.len()),
    }

    Ok(())
}
