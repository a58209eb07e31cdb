use super::*;

/// Tests creating a book with every field set.
///
/// Verifies that the repository inserts a row, assigns an identifier, and
/// returns the stored values.
///
/// Expected: Ok with book created
#[tokio::test]
async fn creates_book_with_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let book = repo
        .create(CreateBookParams {
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            description: Some("Big Brother is watching".to_string()),
        })
        .await?;

    assert!(book.id > 0);
    assert_eq!(book.title, "1984");
    assert_eq!(book.author, "George Orwell");
    assert_eq!(book.description.as_deref(), Some("Big Brother is watching"));

    // Verify book exists in database
    let db_book = entity::prelude::Book::find_by_id(book.id).one(db).await?;
    assert!(db_book.is_some());
    assert_eq!(db_book.unwrap().title, "1984");

    Ok(())
}

/// Tests creating a book without a description.
///
/// Expected: Ok with description stored as NULL
#[tokio::test]
async fn creates_book_without_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let book = repo
        .create(CreateBookParams {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            description: None,
        })
        .await?;

    let db_book = entity::prelude::Book::find_by_id(book.id)
        .one(db)
        .await?
        .unwrap();
    assert!(db_book.description.is_none());

    Ok(())
}

/// Tests that each created book receives a new identifier.
///
/// Expected: Ok with distinct IDs and two rows
#[tokio::test]
async fn assigns_new_identifier_per_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_book(db).await?;

    let repo = BookRepository::new(db);
    let book = repo
        .create(CreateBookParams {
            title: "Emma".to_string(),
            author: "Jane Austen".to_string(),
            description: None,
        })
        .await?;

    assert_ne!(book.id, existing.id);
    assert_eq!(entity::prelude::Book::find().count(db).await?, 2);

    Ok(())
}
