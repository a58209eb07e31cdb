//! Book factory for creating test book entities.
//!
//! This module provides factory methods for creating book entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test books with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::book::BookFactory;
///
/// let book = BookFactory::new(&db)
///     .title("Dune")
///     .author("Frank Herbert")
///     .build()
///     .await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    author: String,
    description: Option<String>,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Book {id}"` where id is auto-incremented
    /// - author: `"Author {id}"`
    /// - description: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `BookFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Book {}", id),
            author: format!("Author {}", id),
            description: None,
        }
    }

    /// Sets the title for the book.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the author for the book.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the description for the book.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the book entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::book::Model)` - Created book entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        entity::book::ActiveModel {
            title: ActiveValue::Set(self.title),
            author: ActiveValue::Set(self.author),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values.
///
/// Shorthand for `BookFactory::new(db).build().await`.
pub async fn create_book(db: &DatabaseConnection) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_book_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_book_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let book = create_book(db).await?;

        assert!(book.id > 0);
        assert!(!book.title.is_empty());
        assert!(!book.author.is_empty());
        assert!(book.description.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_book_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_book_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let book = BookFactory::new(db)
            .title("1984")
            .author("George Orwell")
            .description("Big Brother is watching")
            .build()
            .await?;

        assert_eq!(book.title, "1984");
        assert_eq!(book.author, "George Orwell");
        assert_eq!(book.description.as_deref(), Some("Big Brother is watching"));

        Ok(())
    }

    #[tokio::test]
    async fn creates_books_with_unique_ids() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_book_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let books = crate::factory::helpers::create_books(db, 3).await?;

        assert_eq!(books.len(), 3);
        assert!(books[0].id < books[1].id && books[1].id < books[2].id);
        assert_ne!(books[0].title, books[1].title);

        Ok(())
    }
}
