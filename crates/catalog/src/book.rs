use serde::{Deserialize, Deserializer, Serialize};

use bookdepot_core::BookId;

/// Catalog record for a single title.
///
/// `inventory` is a signed count: reserve-type order lines are allowed to
/// drive it below zero (back-orders), so it is not a `u64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub inventory: i64,
    pub notes: Option<String>,
}

impl Book {
    /// Case-sensitive literal substring match against the searchable fields.
    /// Any single field matching qualifies the book.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.contains(needle)
            || self.author.contains(needle)
            || self.category.contains(needle)
            || self.isbn.contains(needle)
    }
}

/// Parameters for adding a new catalog entry.
///
/// `id` and `inventory` are store-assigned and deliberately absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBookParams {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Parameters for updating the textual fields of an existing entry.
///
/// Omitted fields retain their prior value. `notes` is the one field that
/// can be explicitly cleared, so it is tri-state: key absent retains, key
/// present with `null` clears, key present with a string sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBookParams {
    pub id: BookId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "some_if_present")]
    pub notes: Option<Option<String>>,
}

/// Maps a present JSON key (whether `null` or a value) to `Some(..)`,
/// leaving the serde `default` of `None` to mean "key absent".
fn some_if_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// A direct stock correction: either a relative increment or an absolute set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjustment {
    pub book_id: BookId,
    #[serde(default)]
    pub increment: Option<i64>,
    #[serde(default)]
    pub set: Option<i64>,
}
