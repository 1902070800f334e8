//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    products::{Category, Product, ProductId, SpecRow},
};

/// Wrapper for the product list in YAML.
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Seed products in display order.
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Unique product id
    pub id: u32,

    /// Product name
    pub name: String,

    /// Product price (e.g., "399.99 USD")
    pub price: String,

    /// Photo URL
    pub image: String,

    /// Category label (e.g., "Smart Glasses")
    pub category: String,

    /// Brand name
    pub brand: String,

    /// Marketing description
    pub description: String,

    /// Ordered spec sheet rows
    pub specs: Vec<SpecRowFixture>,
}

/// One spec sheet row in YAML.
#[derive(Debug, Deserialize)]
pub struct SpecRowFixture {
    /// Row label
    pub label: String,

    /// Row value
    pub value: String,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;
        let category = Category::parse(&fixture.category)?;

        let specs = fixture
            .specs
            .into_iter()
            .map(|row| SpecRow {
                label: row.label,
                value: row.value,
            })
            .collect();

        Ok(Product {
            id: ProductId(fixture.id),
            name: fixture.name,
            price: Money::from_minor(minor_units, currency),
            image: fixture.image,
            category,
            brand: fixture.brand,
            description: fixture.description,
            specs,
        })
    }
}

/// Parse a price string (e.g., "399.99 USD") into minor units and currency.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_accepts_decimal_amounts() -> Result<(), FixtureError> {
        let (minor, currency) = parse_price("399.99 USD")?;

        assert_eq!(minor, 39_999);
        assert_eq!(currency, USD);

        Ok(())
    }

    #[test]
    fn parse_price_rejects_missing_currency() {
        let result = parse_price("399.99");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn product_fixture_converts_to_domain_product() -> Result<(), FixtureError> {
        let fixture = ProductFixture {
            id: 5,
            name: "Smart Glasses Lite".to_string(),
            price: "199.99 USD".to_string(),
            image: "https://example.test/glasses.jpg".to_string(),
            category: "Smart Glasses".to_string(),
            brand: "TechVision".to_string(),
            description: "Entry-level smart glasses.".to_string(),
            specs: vec![SpecRowFixture {
                label: "Weight".to_string(),
                value: "35g".to_string(),
            }],
        };

        let product = Product::try_from(fixture)?;

        assert_eq!(product.id, ProductId(5));
        assert_eq!(product.category, Category::SmartGlasses);
        assert_eq!(product.price, Money::from_minor(19_999, USD));
        assert_eq!(product.specs.len(), 1);

        Ok(())
    }
}
