use super::*;

/// Tests updating every mutable field of a book.
///
/// Expected: Ok(Some) with new values persisted and the ID unchanged
#[tokio::test]
async fn updates_book_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::book::BookFactory::new(db)
        .description("Old description")
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let updated = repo
        .update(UpdateBookParams {
            id: created.id,
            title: "Animal Farm".to_string(),
            author: "George Orwell".to_string(),
            description: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Animal Farm");
    assert_eq!(updated.author, "George Orwell");
    assert!(updated.description.is_none());

    // Verify the change was persisted
    let db_book = entity::prelude::Book::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_book.title, "Animal Farm");
    assert!(db_book.description.is_none());

    Ok(())
}

/// Tests updating a book that does not exist.
///
/// Expected: Ok(None) and no rows written
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let result = repo
        .update(UpdateBookParams {
            id: 42,
            title: "Ghost".to_string(),
            author: "Nobody".to_string(),
            description: None,
        })
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Book::find().count(db).await?, 0);

    Ok(())
}

/// Tests that updating one book leaves the others untouched.
///
/// Expected: Ok with only the targeted row changed
#[tokio::test]
async fn leaves_other_books_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let books = factory::create_books(db, 2).await?;

    let repo = BookRepository::new(db);
    repo.update(UpdateBookParams {
        id: books[0].id,
        title: "Changed".to_string(),
        author: "Changed".to_string(),
        description: None,
    })
    .await?;

    let other = entity::prelude::Book::find_by_id(books[1].id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(other, books[1]);

    Ok(())
}
