use super::*;

/// Tests getting an existing book by ID.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn returns_existing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::book::BookFactory::new(db)
        .title("Emma")
        .author("Jane Austen")
        .description("Matchmaking")
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let book = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(book.id, created.id);
    assert_eq!(book.title, "Emma");
    assert_eq!(book.author, "Jane Austen");
    assert_eq!(book.description.as_deref(), Some("Matchmaking"));

    Ok(())
}

/// Tests getting a book that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_book(db).await?;

    let repo = BookRepository::new(db);
    let book = repo.get_by_id(9999).await?;

    assert!(book.is_none());

    Ok(())
}
