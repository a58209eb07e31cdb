//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let book = factory::book::create_book(&db).await?;
//!
//!     // Create several at once
//!     let books = factory::helpers::create_books(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let book = factory::book::BookFactory::new(&db)
//!     .title("1984")
//!     .author("George Orwell")
//!     .description("A dystopian novel")
//!     .build()
//!     .await?;
//! ```

pub mod book;
pub mod helpers;

// Re-export commonly used factory functions for concise usage
pub use book::create_book;
pub use helpers::create_books;
