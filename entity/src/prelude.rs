pub use super::book::Entity as Book;
