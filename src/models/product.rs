//! Product record - A catalog entry available for quotation.
//!
//! Products carry a unit price and a unit of sale. Saved quotations embed a
//! full copy of each product at the moment of sale, so editing or deleting a
//! catalog entry never rewrites history.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of sale for a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Piece,
    Meter,
    Box,
    Kg,
    Liter,
    Set,
    Pack,
    Roll,
    /// Square meter
    Sqm,
}

impl UnitType {
    /// All unit types, in display order.
    pub const ALL: [Self; 9] = [
        Self::Piece,
        Self::Meter,
        Self::Box,
        Self::Kg,
        Self::Liter,
        Self::Set,
        Self::Pack,
        Self::Roll,
        Self::Sqm,
    ];

    /// Human-readable label, used on rendered documents.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Piece => "Piece",
            Self::Meter => "Meter",
            Self::Box => "Box",
            Self::Kg => "Kilogram",
            Self::Liter => "Liter",
            Self::Set => "Set",
            Self::Pack => "Pack",
            Self::Roll => "Roll",
            Self::Sqm => "Square Meter",
        }
    }

    /// Wire value, as stored in persisted records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Piece => "piece",
            Self::Meter => "meter",
            Self::Box => "box",
            Self::Kg => "kg",
            Self::Liter => "liter",
            Self::Set => "set",
            Self::Pack => "pack",
            Self::Roll => "roll",
            Self::Sqm => "sqm",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product catalog record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier, immutable after creation
    pub id: String,
    /// Display name, never empty
    pub name: String,
    /// Price per unit, non-negative
    pub unit_price: Decimal,
    /// Unit of sale
    pub unit_type: UnitType,
    /// Optional category label. Soft reference: the label may have been
    /// removed from the category list since this product was tagged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Optional public URL of an uploaded product image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// When the product was created, immutable
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a product. The store assigns the identifier
/// and creation timestamp.
#[derive(Clone, Debug)]
pub struct ProductInput {
    pub name: String,
    pub unit_price: Decimal,
    pub unit_type: UnitType,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

/// Partial product update: every field is "set if present". Clearable fields
/// take a nested `Option` so `Some(None)` unsets while `None` leaves the
/// stored value untouched. The identifier and creation timestamp cannot be
/// changed.
#[derive(Clone, Debug, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub unit_price: Option<Decimal>,
    pub unit_type: Option<UnitType>,
    pub category: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
}
