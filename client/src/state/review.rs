//! Product reviews and the draft state behind the review form.
//!
//! DESIGN
//! ======
//! Validation is presence-only. Every submit attempt recomputes the error
//! list from the current draft, so stale messages never linger after the
//! shopper fixes a field.

#[cfg(test)]
#[path = "review_test.rs"]
mod review_test;

use serde::{Deserialize, Serialize};

/// Ratings offered by the form, in display order.
pub const RATING_OPTIONS: [u8; 5] = [5, 4, 3, 2, 1];

/// A submitted product review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub review: String,
    pub rating: u8,
}

/// A missing required field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReviewError {
    #[error("Name required.")]
    NameRequired,
    #[error("Review required.")]
    ReviewRequired,
    #[error("Rating required.")]
    RatingRequired,
}

/// Check a draft and build the review it describes.
///
/// Fields are copied verbatim. On failure the errors come back in field order
/// (name, review, rating).
///
/// # Errors
///
/// Returns one [`ReviewError`] per missing field.
pub fn validate(name: &str, review: &str, rating: Option<u8>) -> Result<Review, Vec<ReviewError>> {
    let mut errors = Vec::new();
    if name.is_empty() {
        errors.push(ReviewError::NameRequired);
    }
    if review.is_empty() {
        errors.push(ReviewError::ReviewRequired);
    }
    let Some(rating) = rating else {
        errors.push(ReviewError::RatingRequired);
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(Review { name: name.to_owned(), review: review.to_owned(), rating })
}

/// Map a `<select>` value onto one of [`RATING_OPTIONS`].
///
/// The empty placeholder option (and anything not offered) means "no rating".
pub fn parse_rating(raw: &str) -> Option<u8> {
    match raw.parse::<u8>() {
        Ok(rating) if RATING_OPTIONS.contains(&rating) => Some(rating),
        _ => None,
    }
}

/// Editable review form fields plus the messages from the last failed submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewFormState {
    pub name: String,
    pub review: String,
    pub rating: Option<u8>,
    pub errors: Vec<ReviewError>,
}

impl ReviewFormState {
    /// Attempt to submit the current draft.
    ///
    /// On success the draft and error list are cleared and the review is
    /// returned for publishing. On failure the error list is replaced and the
    /// entered fields are left as they were.
    pub fn submit(&mut self) -> Option<Review> {
        match validate(&self.name, &self.review, self.rating) {
            Ok(review) => {
                *self = Self::default();
                Some(review)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Error messages in display order.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}
