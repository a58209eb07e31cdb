//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Classifying missing records and failed writes as domain errors
//! - **Orchestration**: Coordinating repository calls and external identity provider requests
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod book;
