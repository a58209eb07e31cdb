//! Book domain models and parameters.
//!
//! Provides the book domain model used by the service layer together with the
//! validated parameter types for create and update operations. Parameters can only be
//! constructed through `from_dto`, so a parameter value is always trimmed and within
//! the shared field limits.

use crate::{
    model::book::{validate_book_fields, BookDto, CreateBookDto, UpdateBookDto},
    server::{error::AppError, util::parse::parse_book_id},
};

/// A persisted book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Server-assigned identifier.
    pub id: i32,
    /// Book title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Optional free-form description.
    pub description: Option<String>,
}

impl Book {
    /// Converts an entity model to a book domain model at the repository boundary.
    pub fn from_entity(entity: entity::book::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            author: entity.author,
            description: entity.description,
        }
    }

    /// Converts the book domain model to a DTO for API responses.
    pub fn into_dto(self) -> BookDto {
        BookDto {
            id: self.id,
            title: self.title,
            author: self.author,
            description: self.description,
        }
    }
}

/// Validated parameters for creating a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookParams {
    pub title: String,
    pub author: String,
    pub description: Option<String>,
}

impl CreateBookParams {
    /// Validates a create request body.
    ///
    /// # Arguments
    /// - `dto` - Request body as received
    ///
    /// # Returns
    /// - `Ok(CreateBookParams)` - Trimmed, validated parameters
    /// - `Err(AppError::Validation)` - One or more fields failed validation
    pub fn from_dto(dto: CreateBookDto) -> Result<Self, AppError> {
        let fields = validate_book_fields(&dto.title, &dto.author, dto.description.as_deref())
            .map_err(AppError::validation)?;

        Ok(Self {
            title: fields.title,
            author: fields.author,
            description: fields.description,
        })
    }
}

/// Validated parameters for updating a book in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBookParams {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
}

impl UpdateBookParams {
    /// Validates an update request against its route identifier.
    ///
    /// The identifier checks run before the field checks so a mismatched request is
    /// always reported as a mismatch.
    ///
    /// # Arguments
    /// - `path_id` - Identifier from the request path
    /// - `dto` - Request body as received
    ///
    /// # Returns
    /// - `Ok(UpdateBookParams)` - Trimmed, validated parameters
    /// - `Err(AppError::Validation)` - Non-positive id, id mismatch, or invalid fields
    pub fn from_dto(path_id: i32, dto: UpdateBookDto) -> Result<Self, AppError> {
        let id = parse_book_id(path_id)?;

        if dto.id != id {
            return Err(AppError::Validation {
                message: "Book ID mismatch".to_string(),
                errors: vec!["Route ID does not match body ID".to_string()],
            });
        }

        let fields = validate_book_fields(&dto.title, &dto.author, dto.description.as_deref())
            .map_err(AppError::validation)?;

        Ok(Self {
            id,
            title: fields.title,
            author: fields.author,
            description: fields.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_params_are_trimmed() {
        let params = CreateBookParams::from_dto(CreateBookDto {
            title: " 1984 ".to_string(),
            author: "Orwell".to_string(),
            description: Some(String::new()),
        })
        .unwrap();

        assert_eq!(params.title, "1984");
        assert_eq!(params.description, None);
    }

    #[test]
    fn create_rejects_empty_author() {
        let result = CreateBookParams::from_dto(CreateBookDto {
            title: "1984".to_string(),
            author: String::new(),
            description: None,
        });

        match result {
            Err(AppError::Validation { errors, .. }) => {
                assert_eq!(errors, vec!["Author is required".to_string()])
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn update_rejects_id_mismatch() {
        let result = UpdateBookParams::from_dto(
            1,
            UpdateBookDto {
                id: 2,
                title: "1984".to_string(),
                author: "Orwell".to_string(),
                description: None,
            },
        );

        match result {
            Err(AppError::Validation { errors, .. }) => {
                assert_eq!(errors, vec!["Route ID does not match body ID".to_string()])
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    /// A mismatch is reported even when the fields are also invalid.
    #[test]
    fn update_checks_id_before_fields() {
        let result = UpdateBookParams::from_dto(
            3,
            UpdateBookDto {
                id: 4,
                ..Default::default()
            },
        );

        assert!(matches!(
            result,
            Err(AppError::Validation { ref message, .. }) if message == "Book ID mismatch"
        ));
    }

    #[test]
    fn update_rejects_non_positive_path_id() {
        let result = UpdateBookParams::from_dto(
            0,
            UpdateBookDto {
                id: 0,
                title: "1984".to_string(),
                author: "Orwell".to_string(),
                description: None,
            },
        );

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
