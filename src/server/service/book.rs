use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::book::BookRepository,
    error::AppError,
    model::book::{Book, CreateBookParams, UpdateBookParams},
};

/// Business logic for the book collection.
///
/// Turns the repository's `Option`/`bool` results into classified `AppError`s so
/// controllers only deal with success values.
pub struct BookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new book
    pub async fn create(&self, params: CreateBookParams) -> Result<Book, AppError> {
        let repo = BookRepository::new(self.db);

        let book = repo.create(params).await?;

        tracing::info!(book_id = book.id, "Created book \"{}\"", book.title);

        Ok(book)
    }

    /// Gets every book ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Book>, AppError> {
        let repo = BookRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a book by ID
    ///
    /// # Returns
    /// - `Ok(Book)`: The book
    /// - `Err(AppError::NotFound)`: No book with that ID
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Book, AppError> {
        let repo = BookRepository::new(self.db);

        repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Updates a book in place
    ///
    /// # Returns
    /// - `Ok(Book)`: The book after the update
    /// - `Err(AppError::NotFound)`: No book with that ID
    /// - `Err(AppError::InvalidOperation)`: The write affected no rows
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn update(&self, params: UpdateBookParams) -> Result<Book, AppError> {
        let repo = BookRepository::new(self.db);
        let id = params.id;

        let book = match repo.update(params).await {
            Ok(Some(book)) => book,
            Ok(None) => return Err(not_found(id)),
            Err(DbErr::RecordNotUpdated) => {
                return Err(AppError::InvalidOperation(format!(
                    "Failed to update book with ID {}",
                    id
                )))
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(book_id = book.id, "Updated book");

        Ok(book)
    }

    /// Deletes a book
    ///
    /// # Returns
    /// - `Ok(i32)`: ID of the deleted book
    /// - `Err(AppError::NotFound)`: No book with that ID
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<i32, AppError> {
        let repo = BookRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(book_id = id, "Deleted book");

        Ok(id)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Book with ID {} was not found", id))
}
