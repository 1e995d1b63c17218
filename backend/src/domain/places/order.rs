//! Deterministic listing order shared by every repository.

use std::cmp::Ordering;

use super::PlaceRecord;

/// Total order used for paged listings.
///
/// Completeness score descending with unscored places last, then name
/// ascending with unnamed places last, then id ascending. The id tiebreak
/// makes the order total so pages never overlap or skip records.
///
/// Names compare by Unicode scalar value; the SQL adapter compares under the
/// database collation, which may order accented names differently.
pub fn listing_order(a: &PlaceRecord, b: &PlaceRecord) -> Ordering {
    descending_nulls_last(a.quality_score, b.quality_score)
        .then_with(|| ascending_nulls_last(a.name.as_deref(), b.name.as_deref()))
        .then_with(|| a.id.cmp(&b.id))
}

fn descending_nulls_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn ascending_nulls_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
