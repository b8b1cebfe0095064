//! Field-level validation for request payloads. Lengths are counted in
//! characters, not bytes, so multibyte nicknames measure as written.

use crate::error::AppError;

pub fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len < min {
        return Err(AppError::Validation(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    if len > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

pub fn check_min_length(field: &str, value: &str, min: usize) -> Result<(), AppError> {
    if value.chars().count() < min {
        return Err(AppError::Validation(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_values_at_the_bounds() {
        assert!(check_length("title", "12345", 5, 200).is_ok());
        assert!(check_length("author_nickname", &"x".repeat(50), 2, 50).is_ok());
        assert!(check_min_length("content", "exactly 10", 10).is_ok());
    }

    #[test]
    fn rejects_too_short_and_too_long() {
        assert!(check_length("title", "1234", 5, 200).is_err());
        assert!(check_length("author_nickname", &"x".repeat(51), 2, 50).is_err());
        assert!(check_min_length("content", "too short", 10).is_err());
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 9 bytes in UTF-8 but only 3 characters.
        assert!(check_length("author_nickname", "햄버거", 2, 50).is_ok());
        assert!(check_length("title", "햄버거", 5, 200).is_err());
    }

    #[test]
    fn error_names_the_field() {
        let err = check_length("title", "hi", 5, 200).unwrap_err();
        assert!(err.to_string().contains("title"));
    }
}
