//! SeaORM entity definitions for the book tracker.

pub mod prelude;

pub mod book;
