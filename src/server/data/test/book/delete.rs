use super::*;

/// Tests deleting an existing book.
///
/// Expected: Ok(true) and the row removed
#[tokio::test]
async fn deletes_existing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;

    let repo = BookRepository::new(db);
    let deleted = repo.delete(book.id).await?;

    assert!(deleted);
    let db_book = entity::prelude::Book::find_by_id(book.id).one(db).await?;
    assert!(db_book.is_none());

    Ok(())
}

/// Tests deleting a book that does not exist.
///
/// Expected: Ok(false) and other rows untouched
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_book(db).await?;

    let repo = BookRepository::new(db);
    let deleted = repo.delete(9999).await?;

    assert!(!deleted);
    assert_eq!(entity::prelude::Book::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a deleted book cannot be fetched again.
///
/// Expected: Ok(None) from get_by_id after delete
#[tokio::test]
async fn deleted_book_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;

    let repo = BookRepository::new(db);
    repo.delete(book.id).await?;

    assert!(repo.get_by_id(book.id).await?.is_none());
    assert!(!repo.delete(book.id).await?);

    Ok(())
}
