//! Registering bindings
//!
//! Shows the three binding kinds and how each resolves.
//!
//! ```bash
//! cargo run -p wirebox --example container_set
//! ```

use std::sync::Arc;

use anyhow::Result;
use wirebox::demo::{self, Color};
use wirebox::{Container, Factory, Object};

fn main() -> Result<()> {
    println!("wirebox - Registering Bindings");
    println!("==============================");

    let mut container = Container::new(demo::linked_catalog());

    // Type reference: a fresh Color on every get
    container.set("Color");
    let first = container.resolve("Color")?;
    let second = container.resolve("Color")?;
    println!("Color twice, same instance: {}", first.ptr_eq(&second));

    // Instance: always the same object
    let green = Object::of(Color {
        name: "green".to_string(),
    });
    container.bind("green", green.clone());
    println!(
        "green twice, same instance: {}",
        container.resolve("green")?.ptr_eq(&container.resolve("green")?)
    );

    // Factory: called with the caller's parameters
    container.bind(
        "paint",
        Factory::new(|args| {
            let name: String = args.cloned(0)?;
            Ok(Object::of(Color { name }))
        }),
    );
    let paint: Arc<Color> = container.get_as("paint", vec![Object::from("purple")])?;
    println!("paint(\"purple\") = {}", paint.name);

    println!();
    println!("Registry:");
    for (key, target) in container.view() {
        println!("  {key}: {}", target.kind());
    }

    Ok(())
}
