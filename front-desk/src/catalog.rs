//! Catalog - the in-memory menu and product list
//!
//! The menu is keyed by dish name, so re-adding a name replaces the earlier
//! entry. Products keep their file order but ids are unique: a duplicate id
//! is rejected at insert instead of becoming unreachable behind the first
//! match.
//!
//! The catalog itself is pure in-memory state; persistence goes through the
//! state layer so these operations stay unit-testable without touching the
//! filesystem.

use crate::store::RecordStore;
use shared::models::{MenuItem, Product};
use std::collections::BTreeMap;
use thiserror::Error;

/// Catalog edit errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("product id already exists: {0}")]
    DuplicateProductId(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Default)]
pub struct Catalog {
    menu: BTreeMap<String, MenuItem>,
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate from the record store. Duplicate menu names in the file
    /// follow last-write-wins (map semantics); duplicate product ids are
    /// dropped with a warning so legacy files still load.
    pub fn load(store: &RecordStore) -> Self {
        let mut catalog = Self::new();

        for item in store.load_menu().records {
            catalog.upsert_menu_item(item);
        }
        for product in store.load_products().records {
            if let Err(e) = catalog.add_product(product) {
                tracing::warn!(error = %e, "skipping duplicate product from file");
            }
        }

        catalog
    }

    /// Insert or replace a dish by name. Returns the replaced entry, if any.
    pub fn upsert_menu_item(&mut self, item: MenuItem) -> Option<MenuItem> {
        self.menu.insert(item.name.clone(), item)
    }

    pub fn menu_item(&self, name: &str) -> Option<&MenuItem> {
        self.menu.get(name)
    }

    pub fn menu(&self) -> &BTreeMap<String, MenuItem> {
        &self.menu
    }

    /// Menu entries in key order, for persisting.
    pub fn menu_items(&self) -> Vec<MenuItem> {
        self.menu.values().cloned().collect()
    }

    /// Append a product. Ids are unique across the list.
    pub fn add_product(&mut self, product: Product) -> CatalogResult<()> {
        if self.product_by_id(&product.id).is_some() {
            return Err(CatalogError::DuplicateProductId(product.id));
        }
        self.products.push(product);
        Ok(())
    }

    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn reinserting_a_dish_name_replaces_the_entry() {
        let mut catalog = Catalog::new();
        catalog.upsert_menu_item(MenuItem::new("Okroshka", "kvass, vegetables", dec("8.0"), 20));
        let replaced =
            catalog.upsert_menu_item(MenuItem::new("Okroshka", "kefir, vegetables", dec("8.5"), 20));

        assert!(replaced.is_some());
        assert_eq!(catalog.menu().len(), 1);
        assert_eq!(catalog.menu_item("Okroshka").unwrap().price, dec("8.5"));
    }

    #[test]
    fn duplicate_product_id_is_rejected() {
        let mut catalog = Catalog::new();
        catalog.add_product(Product::new("p-1", "Flour", dec("3.0"))).unwrap();
        let err = catalog
            .add_product(Product::new("p-1", "Rye flour", dec("3.5")))
            .unwrap_err();

        assert_eq!(err, CatalogError::DuplicateProductId("p-1".into()));
        assert_eq!(catalog.products().len(), 1);
        assert_eq!(catalog.product_by_id("p-1").unwrap().name, "Flour");
    }

    #[test]
    fn load_populates_both_containers() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path());
        store
            .save_menu(&[MenuItem::new("Kasha", "buckwheat, butter", dec("4.0"), 10)])
            .unwrap();
        store
            .save_products(&[Product::new("p-1", "Buckwheat", dec("2.0"))])
            .unwrap();

        let catalog = Catalog::load(&store);
        assert_eq!(catalog.menu().len(), 1);
        assert_eq!(catalog.products().len(), 1);
    }

    #[test]
    fn load_with_no_files_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::load(&RecordStore::new(dir.path()));
        assert!(catalog.menu().is_empty());
        assert!(catalog.products().is_empty());
    }
}
