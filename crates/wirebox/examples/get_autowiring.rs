//! Autowiring with explicit overrides
//!
//! ```bash
//! cargo run -p wirebox --example get_autowiring
//! ```

use std::sync::Arc;

use anyhow::Result;
use wirebox::demo::{self, Car, Color};
use wirebox::{Container, Object};

fn main() -> Result<()> {
    println!("wirebox - Autowiring");
    println!("====================");

    let mut container = Container::new(demo::linked_catalog());
    container.set("Color");
    container.set("Car");

    // The plain `owner` parameter comes from the caller, `color` is resolved
    let car: Arc<Car> = container.get_as("Car", vec![Object::from("Alice")])?;
    println!("{} drives a {} car", car.owner, car.color.name);

    // An explicit value wins over the registered Color
    let black = Object::of(Color {
        name: "black".to_string(),
    });
    let car: Arc<Car> = container.get_as("Car", vec![Object::from("Bob"), black])?;
    println!("{} drives a {} car", car.owner, car.color.name);

    // Unregistered keys fail with a hint
    match container.resolve("Boat") {
        Ok(_) => println!("Boat resolved unexpectedly"),
        Err(error) => println!("Boat: {error}"),
    }

    Ok(())
}
