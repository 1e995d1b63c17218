//! Coffee place domain: records, normalisation, filters and predicates.

mod clock_time;
mod filter;
mod normalize;
mod order;
mod place;
mod predicate;
mod rating;
mod record;

pub use self::clock_time::{ClockTime, ClockTimeError};
pub use self::filter::PlaceFilter;
pub use self::normalize::{UNKNOWN_CITY, UNNAMED_PLACE, normalize, normalize_tags};
pub use self::order::listing_order;
pub use self::place::{Address, Amenities, Contact, Location, OpenHours, Place};
pub use self::predicate::{PlacePredicate, PredicateSet};
pub use self::rating::{MAX_RATING, MinRating, MinRatingError, effective_rating};
pub use self::record::PlaceRecord;
