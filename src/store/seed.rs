//! The records present at process start.

use crate::model::{Author, Book};

/// Authors as `(id, name)`.
const AUTHORS: [(i32, &str); 3] = [
    (1, "J. K. Rowling"),
    (2, "J. R. R. Tolkien"),
    (3, "Brent Weeks"),
];

/// Books as `(id, name, author_id)`.
const BOOKS: [(i32, &str, i32); 8] = [
    (1, "Harry Potter and the Chamber of Secrets", 1),
    (2, "Harry Potter and the Prisoner of Azkaban", 1),
    (3, "Harry Potter and the Goblet of Fire", 1),
    (4, "The Fellowship of the Ring", 2),
    (5, "The Two Towers", 2),
    (6, "The Return of the King", 2),
    (7, "The Way of Shadows", 3),
    (8, "Beyond the Shadows", 3),
];

/// The seeded authors, in order.
#[inline]
#[must_use]
pub fn authors() -> Vec<Author> {
    AUTHORS
        .into_iter()
        .map(|(id, name)| Author {
            id,
            name: name.to_owned(),
        })
        .collect()
}

/// The seeded books, in order.
#[inline]
#[must_use]
pub fn books() -> Vec<Book> {
    BOOKS
        .into_iter()
        .map(|(id, name, author_id)| Book {
            id,
            name: name.to_owned(),
            author_id,
        })
        .collect()
}
