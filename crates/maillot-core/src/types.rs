//! # Domain Types
//!
//! Core domain types for the Maillot storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │ ProductCategory │   │    CartLine     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │   (cart.rs)     │       │
//! │  │  id (UUID)      │   │  Cultural       │   │  product_id     │       │
//! │  │  name           │   │  Unique         │   │  size           │       │
//! │  │  price_cents    │   │  Archive        │   │  quantity       │       │
//! │  │  category       │   └─────────────────┘   └─────────────────┘       │
//! │  │  origin         │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Immutable-Once-Created
//! A `Product` is replaced wholesale by admin edits (`Catalog::update`
//! swaps by id); individual fields are never mutated in place.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Product Category
// =============================================================================

/// The merchandising category a jersey belongs to.
///
/// ## Serialization
/// Variants serialize exactly as the SPA and seed data spell them
/// (`"Cultural"`, `"Unique"`, `"Archive"`), so no rename attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ProductCategory {
    /// Heritage designs tied to a country or community.
    Cultural,
    /// One-off designs produced in a single run.
    Unique,
    /// Retired designs kept for reference and re-release.
    Archive,
}

impl ProductCategory {
    /// Returns the display label (same as the wire form).
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            ProductCategory::Cultural => "Cultural",
            ProductCategory::Unique => "Unique",
            ProductCategory::Archive => "Archive",
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A sellable item in the catalog.
///
/// ## Price Representation
/// `price_cents` is the canonical price in USD cents. Display conversion
/// happens in [`crate::currency::Currency`]; nothing here ever changes
/// when the shopper toggles currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4, generated client-side).
    pub id: String,

    /// Display name shown on cards and in the cart.
    pub name: String,

    /// Canonical price in USD cents.
    pub price_cents: i64,

    /// Merchandising category.
    pub category: ProductCategory,

    /// Country or community of origin.
    pub origin: String,

    /// Long-form description for the detail page.
    pub description: String,

    /// Primary image URL.
    pub image: String,

    /// Additional gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,

    /// Materials/composition line.
    pub materials: String,
}

impl Product {
    /// Generates a fresh product id.
    ///
    /// ## Why UUID v4?
    /// Ids are generated client-side with no coordination; uniqueness is
    /// the caller's responsibility and v4 makes collisions negligible.
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Returns the canonical price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: "p-1".to_string(),
            name: "Maple Heritage Jersey".to_string(),
            price_cents: 12000,
            category: ProductCategory::Cultural,
            origin: "Canada".to_string(),
            description: "Heritage design.".to_string(),
            image: "/images/maple.jpg".to_string(),
            images: vec![],
            materials: "100% recycled polyester".to_string(),
        }
    }

    #[test]
    fn test_category_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&ProductCategory::Cultural).unwrap(),
            "\"Cultural\""
        );
        let parsed: ProductCategory = serde_json::from_str("\"Archive\"").unwrap();
        assert_eq!(parsed, ProductCategory::Archive);
    }

    #[test]
    fn test_product_round_trips_camel_case() {
        let product = sample_product();
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"priceCents\":12000"));

        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_missing_images_defaults_to_empty() {
        // Older seed entries omit the gallery array entirely.
        let json = r#"{
            "id": "p-2",
            "name": "Archive 98",
            "priceCents": 9500,
            "category": "Archive",
            "origin": "France",
            "description": "Retired kit.",
            "image": "/images/archive98.jpg",
            "materials": "Cotton blend"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.images.is_empty());
    }

    #[test]
    fn test_generate_id_is_unique() {
        assert_ne!(Product::generate_id(), Product::generate_id());
    }
}
