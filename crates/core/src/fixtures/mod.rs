//! Fixtures
//!
//! YAML seed data for the product catalog, embedded by clients with
//! `include_str!` and parsed at startup.

use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    products::{Product, UnknownCategory},
};

pub mod products;

use products::CatalogFixture;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Unknown category label
    #[error(transparent)]
    Category(#[from] UnknownCategory),

    /// Catalog construction error
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Parse fixture YAML into a seeded catalog.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the YAML is malformed, a price or category
/// cannot be parsed, or the catalog rejects the seed data.
pub fn load_catalog(yaml: &str) -> Result<Catalog, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    let products = fixture
        .products
        .into_iter()
        .map(Product::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Catalog::new(products)?)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::products::{Category, ProductId};

    use super::*;

    const DEMO_YAML: &str = include_str!("../../../../fixtures/products/demo.yml");

    #[test]
    fn demo_fixture_loads_the_full_catalog() -> TestResult {
        let catalog = load_catalog(DEMO_YAML)?;

        assert_eq!(catalog.len(), 9);

        let glasses = catalog.get(ProductId(1)).ok_or("product 1 missing")?;
        assert_eq!(glasses.name, "Smart Glasses Pro");
        assert_eq!(glasses.brand, "TechVision");
        assert_eq!(glasses.category, Category::SmartGlasses);
        assert_eq!(glasses.price.to_minor_units(), 39_999);
        assert_eq!(
            glasses.specs.first().map(|row| row.label.as_str()),
            Some("Battery Life")
        );

        Ok(())
    }

    #[test]
    fn load_catalog_rejects_malformed_yaml() {
        let result = load_catalog("products: {broken");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }

    #[test]
    fn load_catalog_rejects_unknown_category() {
        let yaml = r#"
products:
  - id: 1
    name: Mystery Gadget
    price: "10.00 USD"
    image: ""
    category: Widgets
    brand: Acme
    description: ""
    specs: []
"#;

        let result = load_catalog(yaml);

        assert!(matches!(result, Err(FixtureError::Category(_))));
    }
}
