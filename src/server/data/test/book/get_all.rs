use super::*;

/// Tests listing books from an empty table.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_list_without_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let books = repo.get_all().await?;

    assert!(books.is_empty());

    Ok(())
}

/// Tests that books are returned in identifier order.
///
/// Expected: Ok with all books ordered by ascending ID
#[tokio::test]
async fn returns_all_books_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_books(db, 3).await?;

    let repo = BookRepository::new(db);
    let books = repo.get_all().await?;

    let ids: Vec<i32> = books.iter().map(|b| b.id).collect();
    let expected: Vec<i32> = created.iter().map(|b| b.id).collect();
    assert_eq!(ids, expected);
    assert_eq!(books[0].title, created[0].title);

    Ok(())
}
