//! The records held by the [`Store`](crate::store::Store). They double as the GraphQL output
//! types; the relationship fields are resolved in [`schema`](crate::schema).

use async_graphql::SimpleObject;

/// This represents an author of a book
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(complex)]
pub struct Author {
    /// The identifier of the author, assigned sequentially by the store.
    pub id: i32,
    /// The name of the author.
    pub name: String,
}

/// This represents a book written by an author
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(complex)]
pub struct Book {
    /// The identifier of the book, assigned sequentially by the store.
    pub id: i32,
    /// The title of the book.
    pub name: String,
    /// The identifier of the author. Not checked against the known authors, so this may not
    /// resolve.
    pub author_id: i32,
}
