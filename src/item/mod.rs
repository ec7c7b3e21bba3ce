//! Shopping list item model.
//!
//! This module contains the single persisted entity of the application along
//! with the validation applied to every add and edit:
//! - `Item` and its opaque `ItemId`
//! - `Unit` measurement kinds and their legacy spellings
//! - Quantity normalization rules

mod error;
mod unit;

pub use error::ItemError;
pub use unit::Unit;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantity given to items added without one.
///
pub const DEFAULT_QUANTITY: f64 = 1.0;

/// Opaque unique identifier of an item.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a fresh random identifier.
    ///
    pub fn generate() -> Self {
        ItemId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Defines shopping list item data structure.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub completed: bool,
}

fn default_quantity() -> f64 {
    DEFAULT_QUANTITY
}

impl Item {
    /// Build a new incomplete item with a fresh id, validating every field.
    ///
    pub fn new(text: &str, quantity: f64, unit: Unit) -> Result<Item, ItemError> {
        Ok(Item {
            id: ItemId::generate(),
            text: normalize_text(text)?,
            quantity: normalize_quantity(quantity, unit)?,
            unit,
            completed: false,
        })
    }

    /// Format the quantity the way list rows show it: whole counts followed
    /// by "x", masses with two decimals followed by "kg".
    ///
    pub fn quantity_label(&self) -> String {
        match self.unit {
            Unit::Count => format!("{} x", self.quantity.round() as i64),
            Unit::Kilogram => format!("{:.2} kg", self.quantity),
        }
    }
}

/// Trim surrounding whitespace, rejecting text that is left empty.
///
pub fn normalize_text(text: &str) -> Result<String, ItemError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ItemError::EmptyText);
    }
    Ok(trimmed.to_string())
}

/// Validate a quantity for the given unit.
///
/// Counts are rounded to the nearest integer and never drop below one.
/// Masses keep their fractional value but must not be negative.
///
pub fn normalize_quantity(quantity: f64, unit: Unit) -> Result<f64, ItemError> {
    if !quantity.is_finite() {
        return Err(ItemError::NonFiniteQuantity(quantity));
    }
    match unit {
        Unit::Count => Ok(quantity.round().max(1.0)),
        Unit::Kilogram if quantity < 0.0 => Err(ItemError::NegativeQuantity(quantity)),
        Unit::Kilogram => Ok(quantity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn test_new_trims_text_and_defaults_incomplete() {
        let item = Item::new("  Bread ", 1.0, Unit::Count).unwrap();
        assert_eq!(item.text, "Bread");
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.unit, Unit::Count);
        assert!(!item.completed);
    }

    #[test]
    fn test_new_rejects_blank_text() {
        assert_eq!(Item::new("", 1.0, Unit::Count), Err(ItemError::EmptyText));
        assert_eq!(Item::new("   ", 1.0, Unit::Count), Err(ItemError::EmptyText));
    }

    #[test]
    fn test_new_generates_distinct_ids() {
        let a = Item::new("Milk", 1.0, Unit::Count).unwrap();
        let b = Item::new("Milk", 1.0, Unit::Count).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_normalize_quantity_rounds_counts() {
        assert_eq!(normalize_quantity(2.4, Unit::Count), Ok(2.0));
        assert_eq!(normalize_quantity(2.5, Unit::Count), Ok(3.0));
        assert_eq!(normalize_quantity(0.2, Unit::Count), Ok(1.0));
        assert_eq!(normalize_quantity(-4.0, Unit::Count), Ok(1.0));
    }

    #[test]
    fn test_normalize_quantity_keeps_mass_fraction() {
        assert_eq!(normalize_quantity(0.5, Unit::Kilogram), Ok(0.5));
        assert_eq!(normalize_quantity(0.0, Unit::Kilogram), Ok(0.0));
        assert_eq!(
            normalize_quantity(-0.1, Unit::Kilogram),
            Err(ItemError::NegativeQuantity(-0.1))
        );
    }

    #[test]
    fn test_normalize_quantity_rejects_non_finite() {
        assert!(matches!(
            normalize_quantity(f64::NAN, Unit::Kilogram),
            Err(ItemError::NonFiniteQuantity(_))
        ));
        assert!(matches!(
            normalize_quantity(f64::INFINITY, Unit::Count),
            Err(ItemError::NonFiniteQuantity(_))
        ));
    }

    #[test]
    fn test_quantity_label() {
        let mut item: Item = Faker.fake();
        item.unit = Unit::Count;
        item.quantity = 3.0;
        assert_eq!(item.quantity_label(), "3 x");

        item.unit = Unit::Kilogram;
        item.quantity = 0.5;
        assert_eq!(item.quantity_label(), "0.50 kg");
    }

    #[test]
    fn test_serializes_wire_field_names() {
        let item = Item {
            id: ItemId::from("abc"),
            text: "Cheese".to_string(),
            quantity: 0.5,
            unit: Unit::Kilogram,
            completed: true,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc",
                "text": "Cheese",
                "quantity": 0.5,
                "unit": "kg",
                "completed": true
            })
        );
    }

    #[test]
    fn test_deserializes_legacy_record_without_quantity() {
        let item: Item =
            serde_json::from_str(r#"{"id":"1","text":"Eggs","completed":false}"#).unwrap();
        assert_eq!(item.quantity, DEFAULT_QUANTITY);
        assert_eq!(item.unit, Unit::Count);
    }

    #[test]
    fn test_deserializes_kilo_spelling() {
        let item: Item = serde_json::from_str(
            r#"{"id":"1","text":"Apples","quantity":1.25,"unit":"kilo","completed":false}"#,
        )
        .unwrap();
        assert_eq!(item.unit, Unit::Kilogram);
    }
}
