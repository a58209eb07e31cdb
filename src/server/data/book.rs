use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::book::{Book, CreateBookParams, UpdateBookParams};

pub struct BookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new book
    ///
    /// # Arguments
    /// - `params`: Validated book fields
    ///
    /// # Returns
    /// - `Ok(Book)`: The created book with its assigned ID
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateBookParams) -> Result<Book, DbErr> {
        let book = entity::book::ActiveModel {
            title: ActiveValue::Set(params.title),
            author: ActiveValue::Set(params.author),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Book::from_entity(book))
    }

    /// Gets all books ordered by ID
    ///
    /// # Returns
    /// - `Ok(Vec<Book>)`: Every stored book
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<Book>, DbErr> {
        let books = entity::prelude::Book::find()
            .order_by_asc(entity::book::Column::Id)
            .all(self.db)
            .await?;

        Ok(books.into_iter().map(Book::from_entity).collect())
    }

    /// Gets a book by ID
    ///
    /// # Returns
    /// - `Ok(Some(Book))`: The book
    /// - `Ok(None)`: Book not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Book>, DbErr> {
        let book = entity::prelude::Book::find_by_id(id).one(self.db).await?;

        Ok(book.map(Book::from_entity))
    }

    /// Updates a book's title, author and description
    ///
    /// The identifier is never modified.
    ///
    /// # Arguments
    /// - `params`: Validated fields including the target ID
    ///
    /// # Returns
    /// - `Ok(Some(Book))`: The book after the update
    /// - `Ok(None)`: Book not found, nothing was written
    /// - `Err(DbErr)`: Database error
    pub async fn update(&self, params: UpdateBookParams) -> Result<Option<Book>, DbErr> {
        let Some(existing) = entity::prelude::Book::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut book = existing.into_active_model();
        book.title = ActiveValue::Set(params.title);
        book.author = ActiveValue::Set(params.author);
        book.description = ActiveValue::Set(params.description);

        let updated = book.update(self.db).await?;

        Ok(Some(Book::from_entity(updated)))
    }

    /// Deletes a book by ID
    ///
    /// # Returns
    /// - `Ok(true)`: Book deleted
    /// - `Ok(false)`: No book with that ID existed
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Book::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
