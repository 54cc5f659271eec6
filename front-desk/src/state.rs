//! Application state
//!
//! Owns every long-lived component (record store, catalog, account
//! directory, guest session, ledger, audit log) and wires catalog and
//! account mutations to their persistence. Operations take the state by
//! explicit reference; there are no globals, so tests can build isolated
//! instances.

use crate::accounting::Ledger;
use crate::accounts::{AccountDirectory, AccountError};
use crate::audit::AuditLog;
use crate::catalog::{Catalog, CatalogError};
use crate::config::Config;
use crate::guest::Guest;
use crate::purchasing::{self, PurchaseError, PurchaseRequest};
use crate::store::{RecordStore, StoreError};
use rust_decimal::Decimal;
use shared::models::{MenuItem, Product};
use thiserror::Error;

/// Errors surfaced by state-level operations. All of them are recoverable:
/// the caller reports and the loop continues.
#[derive(Debug, Error)]
pub enum StateError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Purchase(#[from] PurchaseError),
}

pub type StateResult<T> = Result<T, StateError>;

#[derive(Debug)]
pub struct AppState {
    pub store: RecordStore,
    pub catalog: Catalog,
    pub accounts: AccountDirectory,
    pub guest: Guest,
    pub ledger: Ledger,
    pub audit: AuditLog,
}

impl AppState {
    /// Load everything the process needs from the data directory. Missing
    /// or partial files degrade to empty containers; nothing here is fatal.
    pub fn initialize(config: &Config) -> Self {
        let store = RecordStore::new(&config.data_dir);
        let catalog = Catalog::load(&store);
        let accounts = AccountDirectory::from_records(store.load_accounts().records);
        let audit = AuditLog::new(store.data_dir());

        if accounts.is_empty() {
            tracing::warn!("no employee accounts loaded; gated actions will be unreachable");
        }

        Self {
            store,
            catalog,
            accounts,
            guest: Guest::new(&config.guest_name),
            ledger: Ledger::new(),
            audit,
        }
    }

    /// Insert or replace a dish and persist the menu. Returns the replaced
    /// entry, if any.
    pub fn upsert_menu_item(&mut self, item: MenuItem) -> StateResult<Option<MenuItem>> {
        let replaced = self.catalog.upsert_menu_item(item);
        self.store.save_menu(&self.catalog.menu_items())?;
        Ok(replaced)
    }

    /// Add a product (unique id) and persist the product list.
    pub fn add_product(&mut self, product: Product) -> StateResult<()> {
        self.catalog.add_product(product)?;
        self.store.save_products(self.catalog.products())?;
        Ok(())
    }

    /// Register a new employee and persist the directory. A taken username
    /// fails before anything is written.
    pub fn register_employee(&mut self, username: &str, password: &str) -> StateResult<()> {
        self.accounts.register(username, password)?;
        self.store.save_accounts(&self.accounts.to_records())?;
        Ok(())
    }

    /// Direct account edit: unconditional upsert, then persist.
    pub fn edit_employee_account(&mut self, username: &str, password: &str) -> StateResult<()> {
        self.accounts.edit(username, password);
        self.store.save_accounts(&self.accounts.to_records())?;
        Ok(())
    }

    /// Recompute the restaurant balance from the guest's order history.
    pub fn compute_balance(&mut self) -> Decimal {
        self.ledger.recompute(self.guest.orders())
    }

    /// Stock desk purchase against the current balance.
    pub fn request_products(
        &mut self,
        product_id: &str,
        quantity: u32,
    ) -> StateResult<PurchaseRequest> {
        let request =
            purchasing::request_products(&self.catalog, &mut self.ledger, product_id, quantity)?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn fresh_state(dir: &std::path::Path) -> AppState {
        AppState::initialize(&Config::with_overrides(dir.to_str().unwrap()))
    }

    #[test]
    fn menu_edits_survive_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut state = fresh_state(dir.path());
            state
                .upsert_menu_item(MenuItem::new("Borscht", "beets", dec("12.5"), 40))
                .unwrap();
        }

        let state = fresh_state(dir.path());
        assert_eq!(state.catalog.menu_item("Borscht").unwrap().price, dec("12.5"));
    }

    #[test]
    fn product_edits_survive_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut state = fresh_state(dir.path());
            state
                .add_product(Product::new("p-1", "Flour", dec("3.0")))
                .unwrap();
        }

        let state = fresh_state(dir.path());
        assert_eq!(state.catalog.product_by_id("p-1").unwrap().cost, dec("3.0"));
    }

    #[test]
    fn registration_persists_and_duplicate_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut state = fresh_state(dir.path());
            state.register_employee("alice", "pw1").unwrap();
            assert!(state.register_employee("alice", "pw2").is_err());
        }

        let state = fresh_state(dir.path());
        assert!(state.accounts.authenticate("alice", "pw1"));
        assert!(!state.accounts.authenticate("alice", "pw2"));
    }

    #[test]
    fn direct_edit_persists_too() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut state = fresh_state(dir.path());
            state.register_employee("alice", "pw1").unwrap();
            state.edit_employee_account("alice", "pw2").unwrap();
        }

        let state = fresh_state(dir.path());
        assert!(state.accounts.authenticate("alice", "pw2"));
    }

    #[test]
    fn balance_flows_from_orders_to_purchasing() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = fresh_state(dir.path());
        state
            .add_product(Product::new("p-1", "Flour", dec("2.0")))
            .unwrap();

        let soup = MenuItem::new("Soup", "water", dec("10.0"), 15);
        state.guest.create_order(vec![soup]);
        state.guest.orders_mut()[0].mark_ready().unwrap();
        state.guest.orders_mut()[0].mark_delivered().unwrap();

        assert_eq!(state.compute_balance(), dec("10.0"));
        let request = state.request_products("p-1", 4).unwrap();
        assert_eq!(request.total_cost, dec("8.0"));
        assert_eq!(state.ledger.balance(), dec("2.0"));
    }
}
