//! Book DTOs and the field rules shared by server validation and the client form.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Maximum title length in characters.
pub const TITLE_MAX_LEN: usize = 200;
/// Maximum author name length in characters.
pub const AUTHOR_MAX_LEN: usize = 100;
/// Maximum description length in characters.
pub const DESCRIPTION_MAX_LEN: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request body for creating a book.
///
/// Missing `title`/`author` deserialize as empty strings so they surface as
/// field-level validation errors rather than a body decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateBookDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request body for updating a book. `id` must match the route identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateBookDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload returned after a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DeletedBookDto {
    pub id: i32,
}

/// Trimmed, validated book fields ready to persist or send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub description: Option<String>,
}

/// A book field subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Title,
    Author,
    Description,
}

/// A validation failure tied to the field that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: BookField,
    pub message: String,
}

/// Checks book fields against the shared limits without normalising them.
///
/// Values are trimmed before checking; an empty description is allowed. Lengths
/// are counted in characters, not bytes.
///
/// # Returns
/// One entry per failing field, in field order. Empty when every field is valid.
pub fn check_book_fields(
    title: &str,
    author: &str,
    description: Option<&str>,
) -> Vec<FieldError> {
    let title = title.trim();
    let author = author.trim();
    let description = description.map(str::trim).unwrap_or_default();

    let mut errors = Vec::new();
    let mut push = |field, message: String| errors.push(FieldError { field, message });

    if title.is_empty() {
        push(BookField::Title, "Title is required".to_string());
    } else if title.chars().count() > TITLE_MAX_LEN {
        push(
            BookField::Title,
            format!("Title must be between 1 and {} characters", TITLE_MAX_LEN),
        );
    }

    if author.is_empty() {
        push(BookField::Author, "Author is required".to_string());
    } else if author.chars().count() > AUTHOR_MAX_LEN {
        push(
            BookField::Author,
            format!(
                "Author name must be between 1 and {} characters",
                AUTHOR_MAX_LEN
            ),
        );
    }

    if description.chars().count() > DESCRIPTION_MAX_LEN {
        push(
            BookField::Description,
            format!(
                "Description cannot exceed {} characters",
                DESCRIPTION_MAX_LEN
            ),
        );
    }

    errors
}

/// Validates and normalises user supplied book fields.
///
/// All fields are trimmed; an empty description becomes `None`.
///
/// # Returns
/// - `Ok(BookFields)` - Normalised fields
/// - `Err(Vec<String>)` - One message per failing field, in field order
pub fn validate_book_fields(
    title: &str,
    author: &str,
    description: Option<&str>,
) -> Result<BookFields, Vec<String>> {
    let errors = check_book_fields(title, author, description);
    if !errors.is_empty() {
        return Err(errors.into_iter().map(|e| e.message).collect());
    }

    Ok(BookFields {
        title: title.trim().to_string(),
        author: author.trim().to_string(),
        description: description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string),
    })
}
