//! PostgreSQL-backed `PlaceRepository` implementation using Diesel ORM.
//!
//! Each [`PlacePredicate`] renders to one `WHERE` conjunct on a boxed query,
//! so counting, paging and random selection share a single filter. The
//! rendering must agree with [`PredicateSet::matches`]:
//!
//! | Predicate    | SQL                                                                 |
//! |--------------|---------------------------------------------------------------------|
//! | `City`       | `lower(coalesce(nullif(btrim(city), ''), 'Unknown')) = lower($1)`   |
//! | `MinRating`  | `(google_rating IS NOT NULL AND google_rating >= $1) OR (google_rating IS NULL AND quality_score >= ceil(2 * $1))` |
//! | `OpensBy`    | `coalesce(open_time, '07:00') <= $1`                                |
//! | `OpenUntil`  | `coalesce(close_time, '22:00') >= $1`                               |
//! | `HasAllTags` | `tags @> $1`                                                        |
//!
//! The raw comparisons rely on the table's CHECK constraints: stored tags are
//! trimmed and lowercase, and opening times carry no seconds.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::{Double, Nullable, Text, Time};
use diesel_async::RunQueryDsl;
use pagination::PageRequest;

use crate::domain::places::{ClockTime, PlacePredicate, PlaceRecord, PredicateSet, UNKNOWN_CITY};
use crate::domain::ports::{PlaceRepository, PlaceRepositoryError};

use super::diesel_helpers::{map_diesel_error_message, map_pool_error_message};
use super::models::PlaceRow;
use super::pool::{DbPool, PoolError};
use super::schema::places;

define_sql_function! { fn lower(value: Text) -> Text; }
define_sql_function! { fn btrim(value: Nullable<Text>) -> Nullable<Text>; }
define_sql_function! { fn nullif(value: Nullable<Text>, sentinel: Text) -> Nullable<Text>; }
define_sql_function! {
    #[sql_name = "coalesce"]
    fn coalesce_text(value: Nullable<Text>, fallback: Text) -> Text;
}
define_sql_function! {
    #[sql_name = "coalesce"]
    fn coalesce_time(value: Nullable<Time>, fallback: Time) -> Time;
}
define_sql_function! { fn random() -> Double; }

type PlacesQuery = places::BoxedQuery<'static, Pg>;

/// Diesel-backed implementation of the place repository port.
#[derive(Clone)]
pub struct DieselPlaceRepository {
    pool: DbPool,
}

impl DieselPlaceRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PlaceRepositoryError {
    PlaceRepositoryError::connection(map_pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error, operation: &str) -> PlaceRepositoryError {
    PlaceRepositoryError::query(map_diesel_error_message(error, operation))
}

/// Add one conjunct per predicate to an unfiltered places query.
fn filtered(filter: &PredicateSet) -> PlacesQuery {
    filter
        .predicates()
        .iter()
        .fold(places::table.into_boxed(), apply_predicate)
}

fn apply_predicate(query: PlacesQuery, predicate: &PlacePredicate) -> PlacesQuery {
    match predicate {
        PlacePredicate::City(city) => query.filter(
            lower(coalesce_text(nullif(btrim(places::city), ""), UNKNOWN_CITY))
                .eq(lower(city.clone())),
        ),
        PlacePredicate::MinRating(min) => query.filter(
            places::google_rating
                .is_not_null()
                .and(places::google_rating.ge(min.value()))
                .or(places::google_rating
                    .is_null()
                    .and(places::quality_score.ge(min.quality_score_threshold()))),
        ),
        PlacePredicate::OpensBy(time) => query.filter(
            coalesce_time(places::open_time, ClockTime::DEFAULT_OPENING.as_naive())
                .le(time.as_naive()),
        ),
        PlacePredicate::OpenUntil(time) => query.filter(
            coalesce_time(places::close_time, ClockTime::DEFAULT_CLOSING.as_naive())
                .ge(time.as_naive()),
        ),
        PlacePredicate::HasAllTags(tags) => query.filter(places::tags.contains(tags.clone())),
    }
}

/// Matches in listing order, restricted to one page.
fn page_query(filter: &PredicateSet, page: PageRequest) -> PlacesQuery {
    // The offset is bounded by the match count before this runs.
    let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
    filtered(filter)
        .order((
            places::quality_score.desc().nulls_last(),
            places::name.asc().nulls_last(),
            places::id.asc(),
        ))
        .limit(i64::from(page.limit()))
        .offset(offset)
}

/// One match chosen uniformly by the database.
fn random_query(filter: &PredicateSet) -> PlacesQuery {
    filtered(filter).order(random()).limit(1)
}

#[async_trait]
impl PlaceRepository for DieselPlaceRepository {
    async fn count(&self, filter: &PredicateSet) -> Result<u64, PlaceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let total: i64 = filtered(filter)
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "count places"))?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn fetch_page(
        &self,
        filter: &PredicateSet,
        page: PageRequest,
    ) -> Result<Vec<PlaceRecord>, PlaceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<PlaceRow> = page_query(filter, page)
            .select(PlaceRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "fetch place page"))?;
        Ok(rows.into_iter().map(PlaceRecord::from).collect())
    }

    async fn fetch_random(
        &self,
        filter: &PredicateSet,
    ) -> Result<Option<PlaceRecord>, PlaceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<PlaceRow> = random_query(filter)
            .select(PlaceRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "fetch random place"))?;
        Ok(row.map(PlaceRecord::from))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<PlaceRecord>, PlaceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<PlaceRow> = places::table
            .filter(places::id.eq(id))
            .select(PlaceRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find place"))?;
        Ok(row.map(PlaceRecord::from))
    }
}
