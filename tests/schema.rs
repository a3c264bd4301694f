//! Executes GraphQL documents directly against the schema.

// Silence unused-crate-dependencies lint for the test crate.
use async_graphql_axum as _;
use axum as _;
use clap as _;
use dotenvy as _;
use parking_lot as _;
use reqwest as _;
use thiserror as _;
use tokio as _;
use tower as _;
use tower_http as _;
use tracing as _;
use tracing_subscriber as _;

#[cfg(test)]
mod tests {
    use async_graphql::{Request, Variables};
    use bookshelf::{LibrarySchema, Store, build_schema};
    use serde_json::{Value, json};
    use std::sync::Arc;

    /// A schema over a freshly seeded store, and the store itself for inspection.
    fn seeded() -> (LibrarySchema, Arc<Store>) {
        let store = Arc::new(Store::seeded());
        (build_schema(Arc::clone(&store)), store)
    }

    /// # Panics
    ///
    /// Panics if the document produces errors.
    async fn execute(schema: &LibrarySchema, request: impl Into<Request>) -> Value {
        let response = schema.execute(request).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        response.data.into_json().expect("Data is valid JSON")
    }

    #[tokio::test]
    async fn single_author_with_books() {
        let (schema, _) = seeded();

        let data = execute(&schema, "{ author(id: 2) { id name books { id name } } }").await;

        assert_eq!(
            data,
            json!({
                "author": {
                    "id": 2,
                    "name": "J. R. R. Tolkien",
                    "books": [
                        { "id": 4, "name": "The Fellowship of the Ring" },
                        { "id": 5, "name": "The Two Towers" },
                        { "id": 6, "name": "The Return of the King" }
                    ]
                }
            })
        );
    }

    #[tokio::test]
    async fn missing_records_are_null() {
        let (schema, _) = seeded();

        let data = execute(&schema, "{ book(id: 99) { id } author(id: 0) { id } }").await;

        assert_eq!(data, json!({ "book": null, "author": null }));
    }

    #[tokio::test]
    async fn lists_in_insertion_order() {
        let (schema, _) = seeded();

        let data = execute(&schema, "{ books { id authorId } authors { name } }").await;

        let ids = data["books"]
            .as_array()
            .expect("books is a list")
            .iter()
            .map(|book| book["id"].as_i64().expect("id is an integer"))
            .collect::<Vec<_>>();
        assert_eq!(ids, (1..=8_i64).collect::<Vec<_>>());
        assert_eq!(
            data["authors"],
            json!([
                { "name": "J. K. Rowling" },
                { "name": "J. R. R. Tolkien" },
                { "name": "Brent Weeks" }
            ])
        );
    }

    #[tokio::test]
    async fn book_resolves_author() {
        let (schema, _) = seeded();

        let data = execute(&schema, "{ book(id: 7) { name authorId author { id name } } }").await;

        assert_eq!(
            data,
            json!({
                "book": {
                    "name": "The Way of Shadows",
                    "authorId": 3,
                    "author": { "id": 3, "name": "Brent Weeks" }
                }
            })
        );
    }

    #[tokio::test]
    async fn add_author() {
        let (schema, store) = seeded();

        let data = execute(
            &schema,
            r#"mutation { addAuthor(name: "Brandon Sanderson") { id name books { id } } }"#,
        )
        .await;

        assert_eq!(
            data,
            json!({ "addAuthor": { "id": 4, "name": "Brandon Sanderson", "books": [] } })
        );
        assert_eq!(store.author_count(), 4);
    }

    #[tokio::test]
    async fn add_book_with_variables() {
        let (schema, store) = seeded();
        let request = Request::new(
            "mutation Add($name: String!, $authorId: Int!) {
                addBook(name: $name, authorId: $authorId) { id name authorId author { name } }
            }",
        )
        .variables(Variables::from_json(
            json!({ "name": "The Hobbit", "authorId": 2 }),
        ));

        let data = execute(&schema, request).await;

        assert_eq!(
            data,
            json!({
                "addBook": {
                    "id": 9,
                    "name": "The Hobbit",
                    "authorId": 2,
                    "author": { "name": "J. R. R. Tolkien" }
                }
            })
        );
        assert_eq!(store.book(9).map(|book| book.name), Some("The Hobbit".to_owned()));

        let data = execute(&schema, "{ author(id: 2) { books { id } } }").await;
        assert_eq!(
            data,
            json!({ "author": { "books": [{ "id": 4 }, { "id": 5 }, { "id": 6 }, { "id": 9 }] } })
        );
    }

    #[tokio::test]
    async fn add_book_with_unknown_author() {
        let (schema, _) = seeded();

        let data = execute(
            &schema,
            r#"mutation { addBook(name: "Orphan", authorId: 42) { id author { id } } }"#,
        )
        .await;

        assert_eq!(data, json!({ "addBook": { "id": 9, "author": null } }));
    }

    #[tokio::test]
    async fn rejects_mistyped_arguments() {
        let (schema, store) = seeded();

        let response = schema
            .execute(r#"mutation { addBook(name: "No author") { id } }"#)
            .await;
        assert!(!response.errors.is_empty());

        let response = schema.execute(r#"{ book(id: "one") { id } }"#).await;
        assert!(!response.errors.is_empty());

        assert_eq!(store.book_count(), 8);
    }

    #[tokio::test]
    async fn introspection_carries_descriptions() {
        let (schema, _) = seeded();

        let data = execute(
            &schema,
            r#"{ __type(name: "Book") { description fields { name } } }"#,
        )
        .await;

        assert_eq!(
            data["__type"]["description"],
            "This represents a book written by an author"
        );
        let fields = data["__type"]["fields"]
            .as_array()
            .expect("fields is a list")
            .iter()
            .map(|field| field["name"].as_str().expect("name is a string"))
            .collect::<Vec<_>>();
        assert_eq!(fields, ["id", "name", "authorId", "author"]);

        let data = execute(&schema, r#"{ __type(name: "Author") { description } }"#).await;
        assert_eq!(
            data["__type"]["description"],
            "This represents an author of a book"
        );
    }
}
