//! Seed catalog loaded at process start.

use bookdepot_core::BookId;

use crate::book::Book;

/// The six titles the service boots with.
pub fn seed_books() -> Vec<Book> {
    fn book(
        id: u64,
        title: &str,
        author: &str,
        isbn: &str,
        category: &str,
        inventory: i64,
        notes: Option<&str>,
    ) -> Book {
        Book {
            id: BookId::new(id),
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            category: category.to_string(),
            inventory,
            notes: notes.map(str::to_string),
        }
    }

    vec![
        book(
            1,
            "Fundamentals of Wavelets",
            "Goswami, Jaideva",
            "3726362789",
            "nonfiction",
            9,
            None,
        ),
        book(
            2,
            "Age of Wrath, The",
            "Eraly, Abraham",
            "3876253647",
            "nonfiction",
            0,
            Some("Backordered until the end of the year"),
        ),
        book(
            3,
            "Slaughterhouse Five",
            "Vonnegut, Kurt",
            "09283746523",
            "fiction",
            3,
            None,
        ),
        book(
            4,
            "Moon is Down, The",
            "Steinbeck, John",
            "37463567283",
            "fiction",
            12,
            None,
        ),
        book(
            5,
            "Dylan on Dylan",
            "Dylan, Bob",
            "28710924383",
            "nonfiction",
            12,
            None,
        ),
        book(
            6,
            "Journal of a Novel",
            "Steinbeck, John",
            "239847201093",
            "fiction",
            8,
            Some("Reorder in November"),
        ),
    ]
}
