//! Builder Pattern: named recipes that assemble tablet orders.
//!
//! A [`ProductBundle`] is an ordered list of priced [`Item`]s. The
//! [`TabBuilder`] recipes each produce a fresh bundle; nothing is shared
//! between calls.

use std::fmt;
use std::io::{self, Write};

use tracing::trace;

// ============================================================================
// Items
// ============================================================================

/// Something that can be packed into an order and priced.
pub trait Item {
    /// Display name used in the order listing.
    fn describe(&self) -> &str;

    /// Price in whole US dollars.
    fn price(&self) -> u32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lenovo;

impl Item for Lenovo {
    fn describe(&self) -> &str {
        "Lenovo Yoga"
    }

    fn price(&self) -> u32 {
        600
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MicroMax;

impl Item for MicroMax {
    fn describe(&self) -> &str {
        "MicroMax"
    }

    fn price(&self) -> u32 {
        400
    }
}

// ============================================================================
// ProductBundle
// ============================================================================

/// An order: items kept in the order they were added.
#[derive(Default)]
pub struct ProductBundle {
    items: Vec<Box<dyn Item>>,
}

impl ProductBundle {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add_item(&mut self, item: impl Item + 'static) {
        trace!(item = item.describe(), price = item.price(), "adding item to bundle");
        self.items.push(Box::new(item));
    }

    /// Sum of every item's price. An empty bundle costs 0.
    pub fn total_cost(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.price())).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &dyn Item> + '_ {
        self.items.iter().map(|item| &**item)
    }

    /// One listing line per item, in insertion order.
    pub fn item_lines(&self) -> Vec<String> {
        self.items().map(listing_line).collect()
    }

    pub fn write_items<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.item_lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Print the listing to stdout.
    pub fn describe_items(&self) {
        for line in self.item_lines() {
            println!("{}", line);
        }
    }
}

fn listing_line(item: &dyn Item) -> String {
    format!("Tablet name: {}, Price (USD): {}", item.describe(), item.price())
}

impl fmt::Display for ProductBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.item_lines().join("\n"))
    }
}

impl fmt::Debug for ProductBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductBundle")
            .field("items", &self.item_lines())
            .field("total_cost", &self.total_cost())
            .finish()
    }
}

// ============================================================================
// Recipes
// ============================================================================

/// Fixed recipes for the two tablet orders.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabBuilder;

impl TabBuilder {
    pub fn build_lenovo_tab(&self) -> ProductBundle {
        let mut order = ProductBundle::new();
        order.add_item(Lenovo);
        order
    }

    pub fn build_micromax_tab(&self) -> ProductBundle {
        let mut order = ProductBundle::new();
        order.add_item(MicroMax);
        order
    }
}

pub fn build_lenovo_bundle() -> ProductBundle {
    TabBuilder.build_lenovo_tab()
}

pub fn build_micromax_bundle() -> ProductBundle {
    TabBuilder.build_micromax_tab()
}

// ============================================================================
// Tests
// ============================================================================
