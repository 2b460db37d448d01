// Singleton Pattern demo: two lookups, one object.
//
// Run with: cargo run --bin singleton_pattern

use anyhow::Context;
use creational_patterns::singleton::{get_instance, same_instance};
use creational_patterns::{logging, DemoConfig};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::load().context("loading demo config")?;
    logging::init(&config);

    let object1 = get_instance();
    let object2 = get_instance();

    object1.print_message();

    println!("object1 is object2: {}", same_instance(object1, object2));

    Ok(())
}
