//! # Catalog Module
//!
//! In-memory product catalog with seed data and the admin export.
//!
//! ## Lifetime
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Lifecycle                                   │
//! │                                                                         │
//! │  Process start ──► Catalog::seeded() ──► hardcoded jersey list          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Admin edits (add / update / remove) mutate the in-memory list          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Process exit ──► edits are GONE (by design - no persistence)           │
//! │                                                                         │
//! │  The escape hatch: export_source() renders the live list as source     │
//! │  text the admin pastes back over seed_products(). Manual,              │
//! │  human-in-the-loop persistence - not a programmatic interface.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{Product, ProductCategory};

// =============================================================================
// Catalog
// =============================================================================

/// The in-memory product list.
///
/// Id uniqueness is the caller's responsibility (ids are generated with
/// [`Product::generate_id`]); names are not unique. State lifetime equals
/// one process - a restart resets to [`seed_products`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: Vec::new(),
        }
    }

    /// Creates a catalog populated with the seed data.
    pub fn seeded() -> Self {
        Catalog {
            products: seed_products(),
        }
    }

    /// Returns all products in insertion order.
    #[inline]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Appends a product.
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Replaces the product with the same id.
    ///
    /// Silent no-op when the id is absent - there is nothing to replace.
    pub fn update(&mut self, updated: Product) {
        if let Some(existing) = self.products.iter_mut().find(|p| p.id == updated.id) {
            *existing = updated;
        }
    }

    /// Removes the product with the given id.
    ///
    /// Silent no-op when the id is absent.
    pub fn remove(&mut self, id: &str) {
        self.products.retain(|p| p.id != id);
    }

    /// Returns the number of products.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Renders the live catalog as source text.
    ///
    /// The output is a `vec![...]` expression the admin pastes over the
    /// body of [`seed_products`] to make the current state the new seed.
    /// This is the manual persistence workaround for the non-persistent
    /// catalog.
    pub fn export_source(&self) -> String {
        let mut out = String::from("vec![\n");
        for product in &self.products {
            out.push_str(&render_product_literal(product));
        }
        out.push(']');
        out
    }
}

/// Renders one product as a Rust struct literal (indented for pasting).
fn render_product_literal(p: &Product) -> String {
    let images = if p.images.is_empty() {
        "vec![]".to_string()
    } else {
        let items: Vec<String> = p
            .images
            .iter()
            .map(|url| format!("{}.to_string()", escape(url)))
            .collect();
        format!("vec![{}]", items.join(", "))
    };

    let mut out = String::new();
    out.push_str("    Product {\n");
    out.push_str(&format!("        id: {}.to_string(),\n", escape(&p.id)));
    out.push_str(&format!("        name: {}.to_string(),\n", escape(&p.name)));
    out.push_str(&format!("        price_cents: {},\n", p.price_cents));
    out.push_str(&format!(
        "        category: ProductCategory::{},\n",
        p.category.label()
    ));
    out.push_str(&format!(
        "        origin: {}.to_string(),\n",
        escape(&p.origin)
    ));
    out.push_str(&format!(
        "        description: {}.to_string(),\n",
        escape(&p.description)
    ));
    out.push_str(&format!(
        "        image: {}.to_string(),\n",
        escape(&p.image)
    ));
    out.push_str(&format!("        images: {},\n", images));
    out.push_str(&format!(
        "        materials: {}.to_string(),\n",
        escape(&p.materials)
    ));
    out.push_str("    },\n");
    out
}

/// Quotes and escapes a string for inclusion in generated source.
fn escape(s: &str) -> String {
    format!("{:?}", s)
}

// =============================================================================
// Seed Data
// =============================================================================

/// The hardcoded product list used before any admin mutation.
///
/// To update: open the admin dashboard, edit products, hit "Export
/// Config", and paste the generated expression over this body.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "7b1f76a4-3e0e-4f4a-9d3c-0a4f0e6b2c01".to_string(),
            name: "Maple Heritage Jersey".to_string(),
            price_cents: 12000,
            category: ProductCategory::Cultural,
            origin: "Canada".to_string(),
            description: "A tribute to northern winters, with a maple-leaf \
                          jacquard knit across the chest."
                .to_string(),
            image: "/images/maple-heritage.jpg".to_string(),
            images: vec![
                "/images/maple-heritage-front.jpg".to_string(),
                "/images/maple-heritage-back.jpg".to_string(),
            ],
            materials: "100% recycled polyester".to_string(),
        },
        Product {
            id: "9c2a40de-61b7-4d2f-8df1-5a7e9c3d1b02".to_string(),
            name: "Sahara Away Kit".to_string(),
            price_cents: 13500,
            category: ProductCategory::Cultural,
            origin: "Morocco".to_string(),
            description: "Sand-toned away kit with hand-drawn zellige \
                          patterning on the sleeves."
                .to_string(),
            image: "/images/sahara-away.jpg".to_string(),
            images: vec!["/images/sahara-away-detail.jpg".to_string()],
            materials: "Polyester-cotton blend".to_string(),
        },
        Product {
            id: "e4d8b7c2-9f31-4c6a-b2e5-7d0c8a5f4e03".to_string(),
            name: "Midnight Run No. 7".to_string(),
            price_cents: 16500,
            category: ProductCategory::Unique,
            origin: "Studio one-off".to_string(),
            description: "Single-run design. Black-on-black embroidery, \
                          numbered 7 of 7."
                .to_string(),
            image: "/images/midnight-run.jpg".to_string(),
            images: vec![],
            materials: "Heavyweight pique cotton".to_string(),
        },
        Product {
            id: "1a5c9e3f-2b84-4a7d-9c60-3e8f1d7b6a04".to_string(),
            name: "Riviera Classic '89".to_string(),
            price_cents: 9500,
            category: ProductCategory::Archive,
            origin: "France".to_string(),
            description: "Faithful re-issue of the 1989 coastal league kit, \
                          retired colourway."
                .to_string(),
            image: "/images/riviera-89.jpg".to_string(),
            images: vec!["/images/riviera-89-back.jpg".to_string()],
            materials: "Cotton blend, vintage wash".to_string(),
        },
        Product {
            id: "6f3d2c81-7e95-4b1a-a8d4-9c2e5b0f3d05".to_string(),
            name: "Andes Altitude Jersey".to_string(),
            price_cents: 12800,
            category: ProductCategory::Cultural,
            origin: "Peru".to_string(),
            description: "Woven trim inspired by highland textiles; thin-air \
                          breathable weave."
                .to_string(),
            image: "/images/andes-altitude.jpg".to_string(),
            images: vec![],
            materials: "Alpaca-polyester blend".to_string(),
        },
        Product {
            id: "b8e61a4d-0c27-4f9e-b3a1-6d5f8c2e9a06".to_string(),
            name: "Archive Keeper '02".to_string(),
            price_cents: 11000,
            category: ProductCategory::Archive,
            origin: "England".to_string(),
            description: "Goalkeeper kit from the 2002 season, reissued from \
                          the original pattern blocks."
                .to_string(),
            image: "/images/keeper-02.jpg".to_string(),
            images: vec![],
            materials: "Padded polyester".to_string(),
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Jersey {}", id),
            price_cents: 10000,
            category: ProductCategory::Unique,
            origin: "Nowhere".to_string(),
            description: "Test".to_string(),
            image: "/t.jpg".to_string(),
            images: vec![],
            materials: "Cotton".to_string(),
        }
    }

    #[test]
    fn test_seeded_catalog_is_nonempty() {
        let catalog = Catalog::seeded();
        assert!(!catalog.is_empty());
        // Seed ids are distinct.
        let mut ids: Vec<&str> = catalog.list().iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_add_and_list() {
        let mut catalog = Catalog::new();
        catalog.add(test_product("a"));
        catalog.add(test_product("b"));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.list()[0].id, "a");
        assert_eq!(catalog.list()[1].id, "b");
    }

    #[test]
    fn test_update_replaces_by_id() {
        let mut catalog = Catalog::new();
        catalog.add(test_product("a"));

        let mut updated = test_product("a");
        updated.price_cents = 55555;
        catalog.update(updated);

        assert_eq!(catalog.get("a").unwrap().price_cents, 55555);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut catalog = Catalog::new();
        catalog.add(test_product("a"));

        catalog.update(test_product("ghost"));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("ghost").is_none());
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let mut catalog = Catalog::new();
        catalog.add(test_product("a"));

        catalog.remove("ghost");
        assert_eq!(catalog.len(), 1);

        catalog.remove("a");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_export_source_reproduces_every_product() {
        let catalog = Catalog::seeded();
        let source = catalog.export_source();

        assert!(source.starts_with("vec!["));
        assert!(source.ends_with(']'));
        for product in catalog.list() {
            assert!(source.contains(&format!("{:?}", product.id)));
            assert!(source.contains(&format!("{:?}", product.name)));
            assert!(source.contains(&format!("ProductCategory::{}", product.category.label())));
        }
    }

    #[test]
    fn test_export_source_escapes_strings() {
        let mut catalog = Catalog::new();
        let mut product = test_product("q");
        product.name = "Says \"hello\"".to_string();
        catalog.add(product);

        let source = catalog.export_source();
        assert!(source.contains(r#""Says \"hello\"""#));
    }
}
