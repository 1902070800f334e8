//! Utils

use clap::Parser;
use tabled::Tabled;

use crate::summary::OrderSummary;

/// Arguments for the checkout demo binary.
#[derive(Debug, Parser)]
pub struct DemoCheckoutArgs {
    /// Discount code to apply before printing the summary
    #[clap(short, long)]
    pub code: Option<String>,

    /// Units of each featured product to add to the cart
    #[clap(short, long, default_value_t = 1)]
    pub quantity: u32,
}

/// One printable row of an order summary table.
#[derive(Debug, Tabled)]
pub struct SummaryRow {
    /// Row label
    pub label: &'static str,

    /// Formatted amount
    pub amount: String,
}

/// Rows for rendering an order summary as a table.
pub fn summary_rows(summary: &OrderSummary) -> Vec<SummaryRow> {
    vec![
        SummaryRow {
            label: "Subtotal",
            amount: summary.subtotal().to_string(),
        },
        SummaryRow {
            label: "Shipping",
            amount: if summary.is_free_shipping() {
                "Free".to_string()
            } else {
                summary.shipping().to_string()
            },
        },
        SummaryRow {
            label: "Discount",
            amount: format!("-{}", summary.discount()),
        },
        SummaryRow {
            label: "Total",
            amount: summary.total().to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use crate::{
        cart::Cart,
        catalog::Catalog,
        products::{Category, Product, ProductId},
    };

    use super::*;

    #[test]
    fn summary_rows_render_free_shipping_label() -> TestResult {
        let catalog = Catalog::new(vec![Product {
            id: ProductId(1),
            name: "Product 1".to_string(),
            price: Money::from_minor(10_000, iso::USD),
            image: String::new(),
            category: Category::SmartRings,
            brand: "TestBrand".to_string(),
            description: String::new(),
            specs: Vec::new(),
        }])?;

        let mut cart = Cart::new();
        cart.add(ProductId(1), 1);

        let discount =
            crate::discounts::AppliedDiscount::new(crate::discounts::resolve_code("SAVE10")?);
        let summary = OrderSummary::compute(&cart, &catalog, Some(&discount))?;

        let rows = summary_rows(&summary);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows.get(1).map(|row| row.amount.as_str()), Some("Free"));

        Ok(())
    }
}
