use crate::server::error::AppError;

/// Validates a book identifier taken from the request path.
///
/// # Arguments
/// - `id` - The identifier parsed from the route
///
/// # Returns
/// - `Ok(i32)` - The identifier is positive
/// - `Err(AppError::Validation)` - The identifier is zero or negative
pub fn parse_book_id(id: i32) -> Result<i32, AppError> {
    if id <= 0 {
        return Err(AppError::Validation {
            message: "Invalid book ID".to_string(),
            errors: vec!["Book ID must be a positive integer".to_string()],
        });
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_ids() {
        assert_eq!(parse_book_id(1).unwrap(), 1);
    }

    #[test]
    fn rejects_zero_and_negative_ids() {
        assert!(matches!(parse_book_id(0), Err(AppError::Validation { .. })));
        assert!(matches!(parse_book_id(-3), Err(AppError::Validation { .. })));
    }
}
