//! Frontend Models
//!
//! The shopping-list item entity and the closed category set.

use serde::{Deserialize, Serialize};

/// Product category. The set is closed: the UI offers no way to add more.
///
/// Serialized form is the Hungarian label itself, so stored data keeps the
/// `category: string` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String")]
pub enum Category {
    #[default]
    #[serde(rename = "Élelmiszer")]
    Elelmiszer,
    #[serde(rename = "Tisztítószer")]
    Tisztitoszer,
    #[serde(rename = "Háztartás")]
    Haztartas,
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from_label(&label)
    }
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 3] = [
        Category::Elelmiszer,
        Category::Tisztitoszer,
        Category::Haztartas,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Elelmiszer => "Élelmiszer",
            Category::Tisztitoszer => "Tisztítószer",
            Category::Haztartas => "Háztartás",
        }
    }

    /// Tolerant decode: unknown labels fall back to the first category.
    pub fn from_label(s: &str) -> Self {
        match s {
            "Tisztítószer" => Category::Tisztitoszer,
            "Háztartás" => Category::Haztartas,
            _ => Category::Elelmiszer,
        }
    }
}

/// One shopping-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier within the list
    pub id: u64,
    /// Product name as entered
    pub name: String,
    /// How many to buy, at least 1
    pub quantity: u32,
    /// Category tag
    pub category: Category,
    /// Whether the item has been checked off
    pub purchased: bool,
}

impl Item {
    /// Create a new, not-yet-purchased item
    pub fn new(id: u64, name: String, quantity: u32, category: Category) -> Self {
        Self {
            id,
            name,
            quantity,
            category,
            purchased: false,
        }
    }
}

/// Coerce a raw quantity draft into a valid amount. Unparsable input falls
/// back to 1; anything below the control minimum is clamped up to it.
pub fn coerce_quantity(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(1).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), category);
        }
    }

    #[test]
    fn test_unknown_label_falls_back_to_first() {
        assert_eq!(Category::from_label("Vegyes"), Category::Elelmiszer);
        assert_eq!(Category::from_label(""), Category::Elelmiszer);
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::Tisztitoszer).unwrap();
        assert_eq!(json, "\"Tisztítószer\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Tisztitoszer);
    }

    #[test]
    fn test_coerce_quantity() {
        assert_eq!(coerce_quantity("3"), 3);
        assert_eq!(coerce_quantity(" 2 "), 2);
        assert_eq!(coerce_quantity("0"), 1);
        assert_eq!(coerce_quantity("-4"), 1);
        assert_eq!(coerce_quantity("sok"), 1);
        assert_eq!(coerce_quantity(""), 1);
    }

    #[test]
    fn test_new_item_defaults() {
        let item = Item::new(7, "Tej".to_string(), 2, Category::Elelmiszer);
        assert_eq!(item.id, 7);
        assert!(!item.purchased);
    }
}
