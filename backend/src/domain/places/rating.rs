//! Rating precedence and the minimum-rating filter value.

use super::PlaceRecord;

/// Highest rating a place can carry.
pub const MAX_RATING: f64 = 5.0;

/// Rating exposed for a record.
///
/// A third-party rating wins; otherwise the completeness score is halved;
/// otherwise the place rates zero. The result is clamped to `[0, 5]`.
///
/// # Examples
/// ```
/// use backend::domain::places::{effective_rating, PlaceRecord};
///
/// let mut record = PlaceRecord::with_id("a");
/// record.quality_score = Some(7);
/// assert_eq!(effective_rating(&record), 3.5);
/// record.google_rating = Some(4.6);
/// assert_eq!(effective_rating(&record), 4.6);
/// ```
pub fn effective_rating(record: &PlaceRecord) -> f64 {
    let raw = match (record.google_rating, record.quality_score) {
        (Some(rating), _) if rating.is_finite() => rating,
        (_, Some(score)) => f64::from(score) / 2.0,
        _ => 0.0,
    };
    raw.clamp(0.0, MAX_RATING)
}

/// Errors raised when building a [`MinRating`].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MinRatingError {
    /// Value was NaN or infinite.
    #[error("rating must be a finite number")]
    NotFinite,
    /// Value fell outside `[0, 5]`.
    #[error("rating must be between 0 and 5, got {0}")]
    OutOfRange(f64),
}

/// Validated lower bound on [`effective_rating`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MinRating(f64);

impl MinRating {
    /// Accept finite values in `[0, 5]`.
    pub fn new(value: f64) -> Result<Self, MinRatingError> {
        if !value.is_finite() {
            return Err(MinRatingError::NotFinite);
        }
        if !(0.0..=MAX_RATING).contains(&value) {
            return Err(MinRatingError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Threshold value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Zero admits every place, so no predicate is needed.
    pub fn is_trivial(self) -> bool {
        self.0 <= 0.0
    }

    /// Smallest completeness score whose halved value meets the threshold.
    ///
    /// Scores are integers, so `score / 2 >= r` is `score >= ceil(2r)`.
    pub fn quality_score_threshold(self) -> i16 {
        // Bounded to 0..=10 by construction.
        (self.0 * 2.0).ceil() as i16
    }

    /// Whether `record` satisfies the bound under the precedence rule.
    pub fn admits(self, record: &PlaceRecord) -> bool {
        effective_rating(record) >= self.0
    }
}
