//! The GraphQL schema: root queries, mutations and the resolvers following the relations between
//! authors and books.

use std::sync::Arc;

use async_graphql::{ComplexObject, Context, EmptySubscription, Object, Result, Schema};

use crate::{
    model::{Author, Book},
    store::Store,
};

/// The schema served by the API.
pub type LibrarySchema = Schema<Query, Mutation, EmptySubscription>;

/// Build the schema over a store.
///
/// The roots keep their own handle; a second one is registered as schema data for the relation
/// resolvers on [`Book`] and [`Author`].
#[inline]
#[must_use]
pub fn build_schema(store: Arc<Store>) -> LibrarySchema {
    let query = Query {
        store: Arc::clone(&store),
    };
    let mutation = Mutation {
        store: Arc::clone(&store),
    };
    Schema::build(query, mutation, EmptySubscription)
        .data(store)
        .finish()
}

/// The store registered as schema data.
fn context_store<'c>(ctx: &Context<'c>) -> Result<&'c Arc<Store>> {
    ctx.data::<Arc<Store>>()
}

/// Root query.
#[derive(Debug)]
pub struct Query {
    /// The store to read from.
    store: Arc<Store>,
}

#[Object]
impl Query {
    /// Single Book
    async fn book(&self, id: i32) -> Option<Book> {
        self.store.book(id)
    }

    /// List of All Books
    async fn books(&self) -> Vec<Book> {
        self.store.books()
    }

    /// Single Author
    async fn author(&self, id: i32) -> Option<Author> {
        self.store.author(id)
    }

    /// List of All Authors
    async fn authors(&self) -> Vec<Author> {
        self.store.authors()
    }
}

/// Root mutation.
#[derive(Debug)]
pub struct Mutation {
    /// The store to append to.
    store: Arc<Store>,
}

#[Object]
impl Mutation {
    /// Add a book
    async fn add_book(&self, name: String, author_id: i32) -> Result<Book> {
        Ok(self.store.add_book(name, author_id)?)
    }

    /// Add an author
    async fn add_author(&self, name: String) -> Result<Author> {
        Ok(self.store.add_author(name)?)
    }
}

#[ComplexObject]
impl Book {
    /// The author of the book, if the referenced author exists.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        Ok(context_store(ctx)?.author_of(self))
    }
}

#[ComplexObject]
impl Author {
    /// The books written by the author.
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        Ok(context_store(ctx)?.books_by(self))
    }
}
