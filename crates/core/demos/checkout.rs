//! Scripted Checkout Example
//!
//! Loads the demo catalog, fills a cart with the featured products, and
//! prints the resulting order summary.
//!
//! Use `-c` to apply a discount code
//! Use `-q` to set the quantity added per product

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tabled::Table;

use vitrine::{
    fixtures::load_catalog,
    state::{AppState, Notification},
    utils::{DemoCheckoutArgs, summary_rows},
};

const DEMO_YAML: &str = include_str!("../../../fixtures/products/demo.yml");

/// Scripted Checkout Example
#[expect(clippy::print_stdout, reason = "Example program output to user")]
pub fn main() -> Result<()> {
    let args = DemoCheckoutArgs::parse();

    let catalog = Arc::new(load_catalog(DEMO_YAML)?);
    let mut state = AppState::new(Arc::clone(&catalog));

    let sink = |notification: Notification| {
        println!("* {}", notification.message);
    };

    let featured: Vec<_> = catalog
        .featured(3)
        .iter()
        .map(|product| product.id)
        .collect();

    for id in featured {
        state.add_to_cart(id, args.quantity, &sink);
    }

    if let Some(code) = args.code.as_deref() {
        match state.apply_discount(code) {
            Ok(()) => println!("* Discount code {} applied", code.trim().to_uppercase()),
            Err(error) => println!("* {error}"),
        }
    }

    let summary = state.summary()?;

    println!("\n{}", Table::new(summary_rows(&summary)));

    Ok(())
}
