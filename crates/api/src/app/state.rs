//! Shared application state: the inventory store and its lock discipline.

use std::sync::RwLock;

use bookdepot_catalog::InventoryStore;

/// The store, owned here and injected into the router at startup.
///
/// A single writer lock guards the whole table so the check-then-apply
/// sequence of an order, and the isbn-uniqueness check of add/update, are
/// each atomic with respect to other mutations. Handlers hold the guard
/// for the full extent of one store call and never across an await.
pub struct AppState {
    pub store: RwLock<InventoryStore>,
}

impl AppState {
    pub fn new(store: InventoryStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }
}
