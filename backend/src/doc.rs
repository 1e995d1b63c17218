//! OpenAPI documentation for the place query API.
//!
//! [`ApiDoc`] registers the place and health handlers together with the
//! schema wrappers from `inbound::http::schemas`, keeping domain types free
//! of utoipa derives. Served by Swagger UI in debug builds and printed by
//! the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    AddressSchema, AmenitiesSchema, ContactSchema, ErrorSchema, FieldErrorSchema, LocationSchema,
    OpenHoursSchema, PageMetaSchema, PlacePageSchema, PlaceSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Coffee place query API",
        description = "Read-only search over normalised coffee places: filter by city, \
            rating, opening window and tags, page through results or pick one at random."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::places::list_places,
        crate::inbound::http::places::list_coffee_shops,
        crate::inbound::http::places::get_place,
        crate::inbound::http::places::get_coffee_shop,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PlaceSchema,
        OpenHoursSchema,
        LocationSchema,
        ContactSchema,
        AddressSchema,
        AmenitiesSchema,
        PageMetaSchema,
        PlacePageSchema,
        FieldErrorSchema,
        ErrorSchema,
    )),
    tags(
        (name = "places", description = "Coffee place search"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
