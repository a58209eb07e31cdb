//! Request/response processing shared by every API route.

pub mod error;
pub mod session;
