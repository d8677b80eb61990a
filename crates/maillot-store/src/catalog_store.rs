//! # Catalog Store
//!
//! Session-lived product catalog state for the shop and admin pages.
//!
//! ## No Persistence - By Design
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Admin Edit Lifecycle                                   │
//! │                                                                         │
//! │  Admin Dashboard            CatalogStore              Lifetime          │
//! │  ───────────────            ────────────              ────────          │
//! │                                                                         │
//! │  Save new product ────────► add(product) ──────────► this session only  │
//! │  Save edited product ─────► update(product) ───────► this session only  │
//! │  Delete product ──────────► remove(id) ────────────► this session only  │
//! │                                                                         │
//! │  Export Config ───────────► export_source() ───────► clipboard text     │
//! │                             (paste over seed_products() to keep edits)  │
//! │                                                                         │
//! │  Process restart ─────────► back to seed data                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tracing::debug;

use maillot_core::catalog::Catalog;
use maillot_core::error::{CoreError, CoreResult};
use maillot_core::types::Product;
use maillot_core::validation::{validate_price_cents, validate_product_id, validate_product_name};

// =============================================================================
// Catalog Store
// =============================================================================

/// Shared handle over the in-memory [`Catalog`].
///
/// Admin inputs are validated here before touching the catalog; the
/// catalog itself stays a dumb list.
pub struct CatalogStore {
    catalog: Arc<Mutex<Catalog>>,
}

impl CatalogStore {
    /// Creates a store seeded with the hardcoded product list.
    pub fn new() -> Self {
        CatalogStore {
            catalog: Arc::new(Mutex::new(Catalog::seeded())),
        }
    }

    /// Creates an empty store (tests and scratch sessions).
    pub fn empty() -> Self {
        CatalogStore {
            catalog: Arc::new(Mutex::new(Catalog::new())),
        }
    }

    /// Returns all products in insertion order.
    pub fn list(&self) -> Vec<Product> {
        let catalog = self.catalog.lock().expect("catalog mutex poisoned");
        catalog.list().to_vec()
    }

    /// Looks up one product by id (the detail-page fetch).
    pub fn get(&self, id: &str) -> CoreResult<Product> {
        let catalog = self.catalog.lock().expect("catalog mutex poisoned");
        catalog
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Adds a product after validating the admin form fields.
    ///
    /// Id uniqueness is the caller's responsibility (ids come from
    /// [`Product::generate_id`]); names are deliberately not unique.
    pub fn add(&self, product: Product) -> CoreResult<()> {
        validate_product_id(&product.id)?;
        validate_product_name(&product.name)?;
        validate_price_cents(product.price_cents)?;

        debug!(product_id = %product.id, name = %product.name, "catalog add");
        let mut catalog = self.catalog.lock().expect("catalog mutex poisoned");
        catalog.add(product);
        Ok(())
    }

    /// Replaces the product with the same id.
    ///
    /// Validates first; an absent id is then a silent no-op.
    pub fn update(&self, product: Product) -> CoreResult<()> {
        validate_product_id(&product.id)?;
        validate_product_name(&product.name)?;
        validate_price_cents(product.price_cents)?;

        debug!(product_id = %product.id, "catalog update");
        let mut catalog = self.catalog.lock().expect("catalog mutex poisoned");
        catalog.update(product);
        Ok(())
    }

    /// Removes a product by id; silent no-op if absent.
    pub fn remove(&self, id: &str) {
        debug!(product_id = %id, "catalog remove");
        let mut catalog = self.catalog.lock().expect("catalog mutex poisoned");
        catalog.remove(id);
    }

    /// Renders the live catalog as seed source text (the admin export).
    ///
    /// The caller puts this on the clipboard; persistence is manual.
    pub fn export_source(&self) -> String {
        let catalog = self.catalog.lock().expect("catalog mutex poisoned");
        catalog.export_source()
    }

    /// Returns the number of products.
    pub fn len(&self) -> usize {
        let catalog = self.catalog.lock().expect("catalog mutex poisoned");
        catalog.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        let catalog = self.catalog.lock().expect("catalog mutex poisoned");
        catalog.is_empty()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use maillot_core::types::ProductCategory;

    fn test_product(name: &str) -> Product {
        Product {
            id: Product::generate_id(),
            name: name.to_string(),
            price_cents: 10000,
            category: ProductCategory::Unique,
            origin: "Studio".to_string(),
            description: "Test".to_string(),
            image: "/t.jpg".to_string(),
            images: vec![],
            materials: "Cotton".to_string(),
        }
    }

    #[test]
    fn test_new_store_is_seeded() {
        let store = CatalogStore::new();
        assert!(!store.is_empty());
    }

    #[test]
    fn test_add_and_get() {
        let store = CatalogStore::empty();
        let product = test_product("Added");
        let id = product.id.clone();

        store.add(product).unwrap();
        assert_eq!(store.get(&id).unwrap().name, "Added");
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let store = CatalogStore::empty();
        let err = store.get("550e8400-e29b-41d4-a716-446655440000");
        assert!(matches!(err, Err(CoreError::ProductNotFound(_))));
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let store = CatalogStore::empty();

        let mut unnamed = test_product("x");
        unnamed.name = String::new();
        assert!(store.add(unnamed).is_err());

        let mut negative = test_product("x");
        negative.price_cents = -1;
        assert!(store.add(negative).is_err());

        let mut bad_id = test_product("x");
        bad_id.id = "not-a-uuid".to_string();
        assert!(store.add(bad_id).is_err());

        assert!(store.is_empty());
    }

    #[test]
    fn test_update_replaces_and_ignores_unknown() {
        let store = CatalogStore::empty();
        let product = test_product("Original");
        let id = product.id.clone();
        store.add(product).unwrap();

        let mut edited = store.get(&id).unwrap();
        edited.price_cents = 42000;
        store.update(edited).unwrap();
        assert_eq!(store.get(&id).unwrap().price_cents, 42000);

        // Unknown id validates fine but replaces nothing.
        let ghost = test_product("Ghost");
        store.update(ghost).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let store = CatalogStore::empty();
        let product = test_product("Keep");
        let id = product.id.clone();
        store.add(product).unwrap();

        store.remove("ghost");
        assert_eq!(store.len(), 1);

        store.remove(&id);
        assert!(store.is_empty());
    }

    #[test]
    fn test_export_contains_live_edits() {
        let store = CatalogStore::empty();
        store.add(test_product("Exported Jersey")).unwrap();

        let source = store.export_source();
        assert!(source.contains("\"Exported Jersey\""));
    }
}
