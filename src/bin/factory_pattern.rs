// Factory Pattern demo: upper-case keys resolved to shapes, then drawn.
//
// Run with: cargo run --bin factory_pattern

use anyhow::Context;
use creational_patterns::{logging, DemoConfig, ShapeFactory};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::load().context("loading demo config")?;
    logging::init(&config);

    let shape_factory = ShapeFactory;

    for key in ["CIRCLE", "RECTANGLE", "SQUARE"] {
        match shape_factory.create(Some(key)) {
            Some(shape) => shape.draw(),
            None => eprintln!("No shape for key {key}"),
        }
    }

    Ok(())
}
