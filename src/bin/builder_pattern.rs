// Builder Pattern demo: two fixed tablet orders and their listings.
//
// Run with: cargo run --bin builder_pattern

use anyhow::Context;
use colored::Colorize;
use creational_patterns::{logging, DemoConfig, TabBuilder};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::load().context("loading demo config")?;
    logging::init(&config);

    let tab_builder = TabBuilder;

    let lenovo_tab = tab_builder.build_lenovo_tab();
    println!("{}", "Lenovo Tablet Order:".bold());
    lenovo_tab.describe_items();

    let micromax_tab = tab_builder.build_micromax_tab();
    println!("\n{}", "MicroMax Tablet Order:".bold());
    micromax_tab.describe_items();

    Ok(())
}
