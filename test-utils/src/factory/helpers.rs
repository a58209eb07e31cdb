//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and bulk creation helpers.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// default field values to prevent collisions in assertions.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates `count` books with default values.
///
/// Books are inserted in order, so their IDs are ascending.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of books to create
///
/// # Returns
/// - `Ok(Vec<entity::book::Model>)` - Created books in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_books(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::book::Model>, DbErr> {
    let mut books = Vec::with_capacity(count);
    for _ in 0..count {
        books.push(crate::factory::book::create_book(db).await?);
    }
    Ok(books)
}
