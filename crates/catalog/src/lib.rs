//! Catalog and inventory domain module.
//!
//! This crate contains the business rules for the book catalog, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod book;
pub mod bootstrap;
pub mod order;
pub mod store;

pub use book::{AddBookParams, Book, StockAdjustment, UpdateBookParams};
pub use order::{
    FulfillmentParams, FulfillmentResult, Order, OrderItem, OrderKind, OrderResult, OrderStatus,
};
pub use store::{
    BookPage, DEFAULT_PAGE_SIZE, FetchBooksParams, FetchBooksResult, InventoryStore,
    SearchBooksParams,
};
