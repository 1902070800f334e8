//! Catalog Filtering & Sorting

use rand::seq::SliceRandom;

use crate::products::{Category, Product};

/// Default price ceiling for the shop range control, in minor units ($500.00).
pub const DEFAULT_MAX_PRICE_MINOR: i64 = 50_000;

/// Category filter: everything, or one category exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Pass-through sentinel.
    #[default]
    All,

    /// Exact match on one category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product category passes this filter.
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    /// Chip label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

/// Sort orders offered by the shop view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Stable seed order (no-op).
    #[default]
    Recommended,

    /// Intentionally randomized shuffle; repeated sorts reorder freely.
    TopSellers,

    /// Descending by product id (higher id = newer).
    NewArrivals,

    /// Ascending price.
    PriceLowToHigh,

    /// Descending price.
    PriceHighToLow,
}

impl SortKey {
    /// Every sort key, in menu order.
    pub const ALL: [SortKey; 5] = [
        SortKey::Recommended,
        SortKey::TopSellers,
        SortKey::NewArrivals,
        SortKey::PriceLowToHigh,
        SortKey::PriceHighToLow,
    ];

    /// Menu label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Recommended => "Recommended",
            SortKey::TopSellers => "Top sellers",
            SortKey::NewArrivals => "New arrivals",
            SortKey::PriceLowToHigh => "Price low to high",
            SortKey::PriceHighToLow => "Price high to low",
        }
    }

    /// Reverse of [`SortKey::label`], for select controls.
    pub fn from_label(label: &str) -> Option<Self> {
        SortKey::ALL.into_iter().find(|key| key.label() == label)
    }
}

/// Composite filter/sort query for the product grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Category filter.
    pub category: CategoryFilter,

    /// Inclusive price ceiling in minor units; the floor is fixed at zero.
    pub max_price_minor: i64,

    /// Free-text needle matched against name or brand.
    pub search_term: String,

    /// Sort applied after filtering.
    pub sort: SortKey,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        CatalogQuery {
            category: CategoryFilter::All,
            max_price_minor: DEFAULT_MAX_PRICE_MINOR,
            search_term: String::new(),
            sort: SortKey::Recommended,
        }
    }
}

/// Produce a filtered, sorted view of the product list.
///
/// Filters AND-compose: category (exact or `All`), price within
/// `[0, max_price_minor]` inclusive, and case-insensitive substring match of
/// the search term against name OR brand. The sort applies after filtering.
pub fn filter_and_sort<'a>(products: &'a [Product], query: &CatalogQuery) -> Vec<&'a Product> {
    let needle = query.search_term.trim().to_lowercase();

    let mut matches: Vec<&Product> = products
        .iter()
        .filter(|product| {
            query.category.matches(product.category)
                && product.price.to_minor_units() <= query.max_price_minor
                && (needle.is_empty()
                    || product.name.to_lowercase().contains(&needle)
                    || product.brand.to_lowercase().contains(&needle))
        })
        .collect();

    match query.sort {
        SortKey::Recommended => {}
        SortKey::TopSellers => matches.shuffle(&mut rand::thread_rng()),
        SortKey::NewArrivals => matches.sort_by(|left, right| right.id.cmp(&left.id)),
        SortKey::PriceLowToHigh => matches.sort_by_key(|product| product.price.to_minor_units()),
        SortKey::PriceHighToLow => matches.sort_by(|left, right| {
            right
                .price
                .to_minor_units()
                .cmp(&left.price.to_minor_units())
        }),
    }

    matches
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rusty_money::{Money, iso};

    use crate::products::ProductId;

    use super::*;

    fn test_products() -> Vec<Product> {
        let entries = [
            (1, "Smart Glasses Pro", "TechVision", Category::SmartGlasses, 39_999),
            (2, "Fitness Tracker Elite", "FitTech", Category::FitnessTrackers, 19_999),
            (3, "SmartWatch Ultra", "WearOS", Category::Smartwatches, 29_999),
            (4, "Smart Ring Gen 3", "RingTech", Category::SmartRings, 24_999),
        ];

        entries
            .into_iter()
            .map(|(id, name, brand, category, price_minor)| Product {
                id: ProductId(id),
                name: name.to_string(),
                price: Money::from_minor(price_minor, iso::USD),
                image: String::new(),
                category,
                brand: brand.to_string(),
                description: String::new(),
                specs: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn default_query_returns_whole_catalog_in_seed_order() {
        let products = test_products();

        let view = filter_and_sort(&products, &CatalogQuery::default());

        let ids: Vec<u32> = view.iter().map(|product| product.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn category_filter_matches_exactly() {
        let products = test_products();

        let query = CatalogQuery {
            category: CategoryFilter::Only(Category::SmartGlasses),
            ..CatalogQuery::default()
        };

        let view = filter_and_sort(&products, &query);

        assert_eq!(view.len(), 1);
        assert_eq!(view.first().map(|product| product.id), Some(ProductId(1)));
    }

    #[test]
    fn price_ceiling_is_inclusive() {
        let products = test_products();

        let query = CatalogQuery {
            max_price_minor: 24_999,
            ..CatalogQuery::default()
        };

        let view = filter_and_sort(&products, &query);

        let ids: Vec<u32> = view.iter().map(|product| product.id.0).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn search_is_case_insensitive_on_name_or_brand() {
        let products = test_products();

        let query = CatalogQuery {
            search_term: "techvision".to_string(),
            ..CatalogQuery::default()
        };
        let by_brand = filter_and_sort(&products, &query);
        assert_eq!(by_brand.len(), 1);
        assert_eq!(by_brand.first().map(|product| product.id), Some(ProductId(1)));

        let query = CatalogQuery {
            search_term: "ULTRA".to_string(),
            ..CatalogQuery::default()
        };
        let by_name = filter_and_sort(&products, &query);
        assert_eq!(by_name.first().map(|product| product.id), Some(ProductId(3)));
    }

    #[test]
    fn filters_compose_with_logical_and() {
        let products = test_products();

        let query = CatalogQuery {
            category: CategoryFilter::Only(Category::SmartGlasses),
            search_term: "fitness".to_string(),
            ..CatalogQuery::default()
        };

        assert!(filter_and_sort(&products, &query).is_empty());
    }

    #[test]
    fn price_sorts_order_by_minor_units() {
        let products = test_products();

        let query = CatalogQuery {
            sort: SortKey::PriceLowToHigh,
            ..CatalogQuery::default()
        };
        let ascending: Vec<u32> = filter_and_sort(&products, &query)
            .iter()
            .map(|product| product.id.0)
            .collect();
        assert_eq!(ascending, vec![2, 4, 3, 1]);

        let query = CatalogQuery {
            sort: SortKey::PriceHighToLow,
            ..CatalogQuery::default()
        };
        let descending: Vec<u32> = filter_and_sort(&products, &query)
            .iter()
            .map(|product| product.id.0)
            .collect();
        assert_eq!(descending, vec![1, 3, 4, 2]);
    }

    #[test]
    fn new_arrivals_sorts_by_id_descending() {
        let products = test_products();

        let query = CatalogQuery {
            sort: SortKey::NewArrivals,
            ..CatalogQuery::default()
        };

        let ids: Vec<u32> = filter_and_sort(&products, &query)
            .iter()
            .map(|product| product.id.0)
            .collect();

        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn top_sellers_shuffle_preserves_membership() {
        let products = test_products();

        let query = CatalogQuery {
            sort: SortKey::TopSellers,
            ..CatalogQuery::default()
        };

        let ids: BTreeSet<u32> = filter_and_sort(&products, &query)
            .iter()
            .map(|product| product.id.0)
            .collect();

        assert_eq!(ids, BTreeSet::from([1, 2, 3, 4]));
    }

    #[test]
    fn sort_key_labels_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_label(key.label()), Some(key));
        }

        assert_eq!(SortKey::from_label("Alphabetical"), None);
    }
}
