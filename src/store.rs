//! The in-memory relational store backing the API.

use parking_lot::RwLock;
use tracing::debug;

use crate::{
    errors::StoreError,
    model::{Author, Book},
};

pub mod seed;

/// An ordered collection of records together with the identifier the next appended record will
/// receive.
#[derive(Debug)]
struct Table<T> {
    /// Name used in errors and logs.
    name: &'static str,
    /// Records in insertion order.
    records: Vec<T>,
    /// Monotonic counter. Starts at `records.len() + 1` and is bumped on every append, so as long
    /// as nothing is removed it matches the length-based sequence. [`None`] once `i32::MAX` has
    /// been handed out.
    next_id: Option<i32>,
}

impl<T> Table<T> {
    /// Wrap the given records. The first appended record gets the identifier after the last one.
    const fn new(name: &'static str, records: Vec<T>) -> Self {
        let next_id = Some(records.len() as i32 + 1);
        Self {
            name,
            records,
            next_id,
        }
    }

    /// Build a record with the next identifier, append it and return a copy.
    fn append(&mut self, build: impl FnOnce(i32) -> T) -> Result<T, StoreError>
    where
        T: Clone,
    {
        let id = self.next_id.ok_or(StoreError::IdsExhausted {
            collection: self.name,
        })?;
        let record = build(id);
        self.next_id = id.checked_add(1);
        self.records.push(record.clone());
        Ok(record)
    }
}

/// Holds the authors and books and answers lookups against their current state.
///
/// Records are only ever appended. Each collection has its own lock; an append holds the write
/// lock while computing the new identifier, so concurrent appends never hand out the same one.
/// Lookups never fail: a missing record is reported as [`None`] or an empty list. Appends only
/// fail once a collection has used up every identifier.
#[derive(Debug)]
pub struct Store {
    /// All authors.
    authors: RwLock<Table<Author>>,
    /// All books.
    books: RwLock<Table<Book>>,
}

impl Store {
    /// Create a store with no records.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_records(Vec::new(), Vec::new())
    }

    /// Create a store holding the [seed data](seed).
    #[inline]
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_records(seed::authors(), seed::books())
    }

    /// Create a store from existing records. Identifiers of later appends continue after the
    /// length of each collection.
    fn from_records(authors: Vec<Author>, books: Vec<Book>) -> Self {
        Self {
            authors: RwLock::new(Table::new("authors", authors)),
            books: RwLock::new(Table::new("books", books)),
        }
    }

    /// Find the book with the given identifier.
    #[inline]
    #[must_use]
    pub fn book(&self, id: i32) -> Option<Book> {
        self.books
            .read()
            .records
            .iter()
            .find(|book| book.id == id)
            .cloned()
    }

    /// All books, in the order they were added.
    #[inline]
    #[must_use]
    pub fn books(&self) -> Vec<Book> {
        self.books.read().records.clone()
    }

    /// Find the author with the given identifier.
    #[inline]
    #[must_use]
    pub fn author(&self, id: i32) -> Option<Author> {
        self.authors
            .read()
            .records
            .iter()
            .find(|author| author.id == id)
            .cloned()
    }

    /// All authors, in the order they were added.
    #[inline]
    #[must_use]
    pub fn authors(&self) -> Vec<Author> {
        self.authors.read().records.clone()
    }

    /// The author referenced by a book, if one with that identifier exists.
    #[inline]
    #[must_use]
    pub fn author_of(&self, book: &Book) -> Option<Author> {
        self.author(book.author_id)
    }

    /// Every book referencing the given author, in collection order.
    #[inline]
    #[must_use]
    pub fn books_by(&self, author: &Author) -> Vec<Book> {
        self.books
            .read()
            .records
            .iter()
            .filter(|book| book.author_id == author.id)
            .cloned()
            .collect()
    }

    /// The number of books.
    #[inline]
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.books.read().records.len()
    }

    /// The number of authors.
    #[inline]
    #[must_use]
    pub fn author_count(&self) -> usize {
        self.authors.read().records.len()
    }

    /// Append a new book and return it.
    ///
    /// The author is not required to exist. A book with a dangling `author_id` is stored as is
    /// and its author simply never resolves.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdsExhausted`] if no identifier is left for a new book.
    #[inline]
    pub fn add_book(&self, name: String, author_id: i32) -> Result<Book, StoreError> {
        let book = self.books.write().append(|id| Book {
            id,
            name,
            author_id,
        })?;

        if self.author(author_id).is_none() {
            debug!(id = book.id, author_id, "added book references unknown author");
        }
        debug!(id = book.id, name = %book.name, author_id, "added book");
        Ok(book)
    }

    /// Append a new author and return it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdsExhausted`] if no identifier is left for a new author.
    #[inline]
    pub fn add_author(&self, name: String) -> Result<Author, StoreError> {
        let author = self.authors.write().append(|id| Author { id, name })?;
        debug!(id = author.id, name = %author.name, "added author");
        Ok(author)
    }
}

impl Default for Store {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
