//! The inventory store: one ordered table of books and every operation
//! that reads or mutates it.
//!
//! Nothing here locks. Callers own the concurrency discipline: the HTTP
//! layer wraps the store in a single writer lock and holds it for the full
//! check-then-apply extent of each mutating call.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use bookdepot_core::{BookId, DomainError, DomainResult};

use crate::book::{AddBookParams, Book, StockAdjustment, UpdateBookParams};
use crate::bootstrap;
use crate::order::{FulfillmentParams, FulfillmentResult, Order, OrderItem, OrderKind, OrderResult};

/// Page length used when a search request does not name one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBooksParams {
    #[serde(default)]
    pub search_string: Option<String>,
    /// Offset into the candidate set; opaque to callers.
    #[serde(default)]
    pub next_token: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

/// One page of search results.
///
/// `total` counts the full candidate set before slicing; `next_token` is
/// present only while more candidates remain past this page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPage {
    pub books: Vec<Book>,
    pub total: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchBooksParams {
    pub book_ids: Vec<BookId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchBooksResult {
    pub books: Vec<Book>,
}

/// The domain core: an ordered book table plus the id counter.
///
/// Ids come from an explicit monotonic counter, never from the table size,
/// so assignment stays correct even if deletion is ever added. Since ids
/// only grow, `BTreeMap` iteration order is insertion order.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    books: BTreeMap<BookId, Book>,
    next_id: u64,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            books: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// A store seeded with the six-title bootstrap catalog.
    pub fn bootstrap() -> Self {
        let mut store = Self::new();
        for book in bootstrap::seed_books() {
            store.next_id = book.id.value() + 1;
            store.books.insert(book.id, book);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn allocate_id(&mut self) -> BookId {
        let id = BookId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// True when `isbn` would not collide with any book other than
    /// `exclude`. Empty isbns never conflict.
    fn isbn_available(&self, isbn: &str, exclude: Option<BookId>) -> bool {
        if isbn.is_empty() {
            return true;
        }
        !self
            .books
            .values()
            .any(|b| Some(b.id) != exclude && b.isbn == isbn)
    }

    /// Add a new catalog entry with inventory zero.
    pub fn add_book(&mut self, params: AddBookParams) -> DomainResult<Book> {
        if !self.isbn_available(&params.isbn, None) {
            return Err(DomainError::conflict("ISBN already exists"));
        }

        let book = Book {
            id: self.allocate_id(),
            title: params.title,
            author: params.author,
            isbn: params.isbn,
            category: params.category,
            inventory: 0,
            notes: params.notes,
        };
        self.books.insert(book.id, book.clone());
        Ok(book)
    }

    /// Update the textual fields of an existing entry. Inventory is owned
    /// by `adjust_inventory` and `fulfill_orders` and is never touched here.
    pub fn update_book_details(&mut self, params: UpdateBookParams) -> DomainResult<Book> {
        let current = self
            .books
            .get(&params.id)
            .ok_or_else(|| DomainError::not_found(format!("Item {} does not exist", params.id)))?
            .clone();

        if let Some(isbn) = &params.isbn {
            if *isbn != current.isbn && !self.isbn_available(isbn, Some(params.id)) {
                return Err(DomainError::conflict("ISBN already exists"));
            }
        }

        let updated = Book {
            id: current.id,
            title: params.title.unwrap_or(current.title),
            author: params.author.unwrap_or(current.author),
            isbn: params.isbn.unwrap_or(current.isbn),
            category: params.category.unwrap_or(current.category),
            // Tri-state: absent key retains, present key (null or string) replaces.
            notes: match params.notes {
                Some(notes) => notes,
                None => current.notes,
            },
            inventory: current.inventory,
        };
        self.books.insert(updated.id, updated.clone());
        Ok(updated)
    }

    /// Apply a direct stock correction and return the resulting count.
    ///
    /// `increment` wins when both fields are present; a negative result is
    /// accepted here (only order fulfillment polices the zero floor, and
    /// only for immediate lines).
    pub fn adjust_inventory(&mut self, params: StockAdjustment) -> DomainResult<i64> {
        let book = self.books.get_mut(&params.book_id).ok_or_else(|| {
            DomainError::not_found(format!("Book {} does not exist", params.book_id))
        })?;

        let new_inventory = match (params.increment, params.set) {
            (Some(delta), _) => book.inventory + delta,
            (None, Some(value)) => value,
            (None, None) => {
                return Err(DomainError::validation(
                    "must specify one of increment or set in request",
                ));
            }
        };
        book.inventory = new_inventory;
        Ok(new_inventory)
    }

    /// Search the catalog, paginated by an offset token.
    ///
    /// Candidate order is always ascending id, so paging is deterministic
    /// whether or not a search term is given.
    pub fn search_books(&self, params: &SearchBooksParams) -> BookPage {
        let candidates: Vec<&Book> = match &params.search_string {
            Some(needle) => self.books.values().filter(|b| b.matches(needle)).collect(),
            None => self.books.values().collect(),
        };

        let offset = params.next_token.unwrap_or(0);
        let page_size = params.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        let total = candidates.len();
        let books = candidates
            .into_iter()
            .skip(offset)
            .take(page_size)
            .cloned()
            .collect();

        let next = offset + page_size;
        BookPage {
            books,
            total,
            next_token: (next < total).then_some(next),
        }
    }

    /// Look up books by id, preserving request order and silently dropping
    /// ids with no match.
    pub fn fetch_books(&self, params: &FetchBooksParams) -> FetchBooksResult {
        FetchBooksResult {
            books: params
                .book_ids
                .iter()
                .filter_map(|id| self.books.get(id))
                .cloned()
                .collect(),
        }
    }

    /// Fulfill a batch of orders strictly in submission order.
    ///
    /// Each order sees the inventory state left by its predecessors; a
    /// rejected order applies nothing and never blocks later orders.
    pub fn fulfill_orders(&mut self, params: FulfillmentParams) -> FulfillmentResult {
        FulfillmentResult {
            orders: params
                .orders
                .into_iter()
                .map(|order| self.fulfill_order(&order))
                .collect(),
        }
    }

    fn fulfill_order(&mut self, order: &Order) -> OrderResult {
        // Check phase: every item is validated against the pre-order
        // snapshot before anything is applied. The first failing item's
        // message decides the order's result.
        for item in &order.items {
            if let Err(e) = self.check_item(item) {
                return OrderResult::rejected(order.order_id, e.to_string());
            }
        }

        // Apply phase: all checks passed, consume the stock.
        for item in &order.items {
            if let Some(book) = self.books.get_mut(&item.book_id) {
                book.inventory -= i64::from(item.quantity);
            }
        }
        OrderResult::accepted(order.order_id)
    }

    fn check_item(&self, item: &OrderItem) -> DomainResult<()> {
        let book = self
            .books
            .get(&item.book_id)
            .ok_or_else(|| DomainError::not_found(format!("item {} does not exist", item.book_id)))?;

        match item.kind {
            OrderKind::Immediate if i64::from(item.quantity) > book.inventory => Err(
                DomainError::conflict("insufficient stock to fulfill order"),
            ),
            // Reserve lines take any quantity; inventory may go negative.
            _ => Ok(()),
        }
    }

    #[cfg(test)]
    fn inventory_of(&self, id: u64) -> i64 {
        self.books[&BookId::new(id)].inventory
    }
}
