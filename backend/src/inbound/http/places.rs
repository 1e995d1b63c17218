//! Place API handlers.
//!
//! ```text
//! GET /api/v1/places                 List places (paged or random)
//! GET /api/v1/places/{id}            Fetch one place
//! GET /api/v1/coffee-shops           Alias of /places
//! GET /api/v1/coffee-shops/{id}      Alias of /places/{id}
//! ```
//!
//! Alias routes share the same implementation and return identical bytes.

use std::collections::HashMap;

use actix_web::error::QueryPayloadError;
use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::place_params::parse_place_filter;
use crate::inbound::http::schemas::{ErrorSchema, PlaceListParams, PlacePageSchema, PlaceSchema};
use crate::inbound::http::state::HttpState;

type RawQuery = web::Query<HashMap<String, String>>;

/// Register place routes. Mount under `/api/v1`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend::inbound::http::places;
///
/// let app = App::new().service(web::scope("/api/v1").configure(places::configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .service(list_places)
        .service(list_coffee_shops)
        .service(get_place)
        .service(get_coffee_shop);
}

/// Undecodable query strings become validation errors, not plain-text 400s.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| malformed_query(&err).into())
}

fn malformed_query(err: &QueryPayloadError) -> Error {
    Error::invalid_request(format!("malformed query string: {err}")).with_details(json!([]))
}

async fn list(state: web::Data<HttpState>, query: RawQuery) -> ApiResult<HttpResponse> {
    let filter = parse_place_filter(&query)?;
    let page = state.places.list_places(filter).await?;
    Ok(HttpResponse::Ok().json(page))
}

async fn fetch(state: web::Data<HttpState>, id: web::Path<String>) -> ApiResult<HttpResponse> {
    let place = state.places.get_place(&id).await?;
    Ok(HttpResponse::Ok().json(place))
}

/// List coffee places matching the supplied filters.
#[utoipa::path(
    get,
    path = "/api/v1/places",
    description = "Filter places by city, minimum rating, opening window and tags. \
        With random=true a single uniformly chosen match is returned. \
        Example request: GET /api/v1/places?city=hanoi&minRating=4&tags=wifi",
    params(PlaceListParams),
    responses(
        (status = 200, description = "Page of places", body = PlacePageSchema),
        (status = 400, description = "Invalid query parameters", body = ErrorSchema),
        (status = 404, description = "Random mode found no match", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["places"],
    operation_id = "listPlaces"
)]
#[get("/places")]
pub async fn list_places(state: web::Data<HttpState>, query: RawQuery) -> ApiResult<HttpResponse> {
    list(state, query).await
}

/// Backward-compatible alias of `GET /api/v1/places`.
#[utoipa::path(
    get,
    path = "/api/v1/coffee-shops",
    params(PlaceListParams),
    responses(
        (status = 200, description = "Page of places", body = PlacePageSchema),
        (status = 400, description = "Invalid query parameters", body = ErrorSchema),
        (status = 404, description = "Random mode found no match", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["places"],
    operation_id = "listCoffeeShops"
)]
#[get("/coffee-shops")]
pub async fn list_coffee_shops(
    state: web::Data<HttpState>,
    query: RawQuery,
) -> ApiResult<HttpResponse> {
    list(state, query).await
}

/// Fetch one place by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/places/{id}",
    params(("id" = String, Path, description = "Place identifier")),
    responses(
        (status = 200, description = "Place", body = PlaceSchema),
        (status = 404, description = "Unknown place", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["places"],
    operation_id = "getPlace"
)]
#[get("/places/{id}")]
pub async fn get_place(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    fetch(state, id).await
}

/// Backward-compatible alias of `GET /api/v1/places/{id}`.
#[utoipa::path(
    get,
    path = "/api/v1/coffee-shops/{id}",
    params(("id" = String, Path, description = "Place identifier")),
    responses(
        (status = 200, description = "Place", body = PlaceSchema),
        (status = 404, description = "Unknown place", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["places"],
    operation_id = "getCoffeeShop"
)]
#[get("/coffee-shops/{id}")]
pub async fn get_coffee_shop(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    fetch(state, id).await
}

#[cfg(test)]
#[path = "places_tests.rs"]
mod tests;
