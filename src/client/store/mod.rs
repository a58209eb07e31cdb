//! Client-side state shared between routes through context.

pub mod book;
