//! Input validation for film records

use crate::config::Config;
use crate::contract::FilmError;

/// Validate a film title
///
/// Titles must be non-blank and at most `Config::max_title_length`
/// characters long.
pub fn validate_title(title: &str, config: &Config) -> Result<(), FilmError> {
    if title.trim().is_empty() {
        return Err(FilmError::Validation {
            message: "title cannot be empty".to_string(),
        });
    }

    if title.chars().count() > config.max_title_length {
        return Err(FilmError::Validation {
            message: format!(
                "title exceeds maximum length of {} characters",
                config.max_title_length
            ),
        });
    }

    Ok(())
}

/// Validate a rating
///
/// Ratings are accepted in the 0.0..=`Config::max_rating` range; NaN is
/// rejected.
pub fn validate_rating(rating: f64, config: &Config) -> Result<(), FilmError> {
    if !rating.is_finite() {
        return Err(FilmError::Validation {
            message: "rating must be a finite number".to_string(),
        });
    }

    if rating < 0.0 || rating > config.max_rating {
        return Err(FilmError::Validation {
            message: format!("rating must be between 0.0 and {}", config.max_rating),
        });
    }

    Ok(())
}
