//! Products

use std::fmt;

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Unique product identifier. Higher ids are newer arrivals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Product category (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Smart glasses
    SmartGlasses,

    /// Smartwatches
    Smartwatches,

    /// Fitness trackers and bands
    FitnessTrackers,

    /// Smart rings
    SmartRings,

    /// Health monitors
    HealthMonitors,

    /// Earbuds and other audio wearables
    AudioWearables,

    /// Pendants and other smart jewelry
    SmartJewelry,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 7] = [
        Category::SmartGlasses,
        Category::Smartwatches,
        Category::FitnessTrackers,
        Category::SmartRings,
        Category::HealthMonitors,
        Category::AudioWearables,
        Category::SmartJewelry,
    ];

    /// Human-readable label, also the fixture spelling.
    pub fn label(self) -> &'static str {
        match self {
            Category::SmartGlasses => "Smart Glasses",
            Category::Smartwatches => "Smartwatches",
            Category::FitnessTrackers => "Fitness Trackers",
            Category::SmartRings => "Smart Rings",
            Category::HealthMonitors => "Health Monitors",
            Category::AudioWearables => "Audio Wearables",
            Category::SmartJewelry => "Smart Jewelry",
        }
    }

    /// Parse a category from its label.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCategory`] if the label does not name a category.
    pub fn parse(label: &str) -> Result<Self, UnknownCategory> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == label.trim())
            .ok_or_else(|| UnknownCategory(label.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The given string does not name a known category.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown product category: {0}")]
pub struct UnknownCategory(pub String);

/// One ordered label/value row in a product's spec sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRow {
    /// Row label, e.g. "Battery Life".
    pub label: String,

    /// Row value, e.g. "12 hours".
    pub value: String,
}

/// Product
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique id; also the arrival order.
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Shelf price
    pub price: Money<'static, Currency>,

    /// Photo URL; display falls back to a placeholder on load failure.
    pub image: String,

    /// Product category
    pub category: Category,

    /// Brand name
    pub brand: String,

    /// Marketing description
    pub description: String,

    /// Ordered spec sheet rows
    pub specs: Vec<SpecRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_ids_order_by_value() {
        assert!(ProductId(9) > ProductId(1));
    }

    #[test]
    fn category_parse_round_trips_labels() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.label()), Ok(category));
        }
    }

    #[test]
    fn category_parse_trims_whitespace() {
        assert_eq!(
            Category::parse("  Smart Rings  "),
            Ok(Category::SmartRings)
        );
    }

    #[test]
    fn category_parse_rejects_unknown_label() {
        let result = Category::parse("Smart Toasters");

        assert!(matches!(result, Err(UnknownCategory(label)) if label == "Smart Toasters"));
    }
}
