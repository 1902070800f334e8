//! Catalog

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::products::{Product, ProductId};

/// Errors related to catalog construction.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two products share the same id.
    #[error("Duplicate product id {0}")]
    DuplicateId(ProductId),

    /// A product's currency differs from the catalog currency.
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// The seed data contained no products.
    #[error("Catalog requires at least one product")]
    Empty,
}

/// The static, read-only product list. Seeded once at startup.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    index: FxHashMap<ProductId, usize>,
    currency: &'static Currency,
}

impl Catalog {
    /// Build a catalog, validating unique ids and a single currency.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the list is empty, an id repeats, or
    /// prices mix currencies.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let first = products.first().ok_or(CatalogError::Empty)?;
        let currency = first.price.currency();

        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            let product_currency = product.price.currency();
            if product_currency != currency {
                return Err(CatalogError::CurrencyMismatch(
                    product.id,
                    product_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Catalog {
            products,
            index,
            currency,
        })
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index
            .get(&id)
            .and_then(|&position| self.products.get(position))
    }

    /// All products in seed order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The first `count` products, shown on the home page.
    pub fn featured(&self, count: usize) -> &[Product] {
        self.products
            .get(..count.min(self.products.len()))
            .unwrap_or(&[])
    }

    /// Currency shared by every product in the catalog.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use crate::products::Category;

    use super::*;

    fn test_product(id: u32, price_minor: i64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            price: Money::from_minor(price_minor, iso::USD),
            image: String::new(),
            category: Category::Smartwatches,
            brand: "TestBrand".to_string(),
            description: String::new(),
            specs: Vec::new(),
        }
    }

    #[test]
    fn new_indexes_products_by_id() -> TestResult {
        let catalog = Catalog::new(vec![test_product(1, 100), test_product(2, 200)])?;

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(ProductId(2)).map(|product| product.name.as_str()),
            Some("Product 2")
        );
        assert!(catalog.get(ProductId(3)).is_none());

        Ok(())
    }

    #[test]
    fn new_rejects_empty_seed() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let result = Catalog::new(vec![test_product(1, 100), test_product(1, 200)]);

        assert!(matches!(result, Err(CatalogError::DuplicateId(ProductId(1)))));
    }

    #[test]
    fn new_rejects_mixed_currencies() {
        let mut gbp_product = test_product(2, 200);
        gbp_product.price = Money::from_minor(200, iso::GBP);

        let result = Catalog::new(vec![test_product(1, 100), gbp_product]);

        match result {
            Err(CatalogError::CurrencyMismatch(id, product_currency, catalog_currency)) => {
                assert_eq!(id, ProductId(2));
                assert_eq!(product_currency, iso::GBP.iso_alpha_code);
                assert_eq!(catalog_currency, iso::USD.iso_alpha_code);
            }
            other => panic!("expected CurrencyMismatch error, got {other:?}"),
        }
    }

    #[test]
    fn featured_clamps_to_catalog_size() -> TestResult {
        let catalog = Catalog::new(vec![test_product(1, 100), test_product(2, 200)])?;

        assert_eq!(catalog.featured(1).len(), 1);
        assert_eq!(catalog.featured(5).len(), 2);

        Ok(())
    }
}
