//! Data transfer objects shared between the server and the client.
//!
//! Everything in here compiles for both the `server` and `web` targets, so it
//! must stay free of server-only dependencies. Server builds additionally derive
//! `utoipa::ToSchema` for OpenAPI generation.

pub mod api;
pub mod book;
pub mod user;
