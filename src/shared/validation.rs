use lazy_static::lazy_static;
use regex::Regex;

use crate::core::error::AppError;

lazy_static! {
    /// Regex for validating slug fields
    /// Must be lowercase alphanumeric with hyphens
    /// - Valid: "jane-doe", "station12", "100-main-st"
    /// - Invalid: "-doe", "doe-", "jane--doe", "Jane", "jane_doe"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();

    /// Any run of characters that may not appear in a slug
    static ref NON_SLUG_RUN: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Derive a URL slug from a display name.
///
/// Lowercases the input, collapses every run of non-alphanumeric characters
/// into a single `-` and trims leading/trailing separators. Non-ASCII letters
/// count as separators, so "Café Noir" becomes "caf-noir".
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    NON_SLUG_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Derive a slug, rejecting names that contain no alphanumerics at all
pub fn required_slug(value: &str, field: &str) -> Result<String, AppError> {
    let slug = slugify(value);
    if slug.is_empty() {
        return Err(AppError::Validation(format!(
            "{} must contain at least one letter or digit",
            field
        )));
    }
    Ok(slug)
}
