//! Behaviour tests for the place listing endpoints over the in-memory store.

use std::cell::RefCell;
use std::sync::Arc;

use actix_web::{App, test as actix_test, web};
use backend::domain::places::PlaceRecord;
use backend::domain::{PlaceQueryService, StaticCityAliases};
use backend::inbound::http::places;
use backend::inbound::http::state::HttpState;
use backend::outbound::in_memory::InMemoryPlaceRepository;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;

struct Response {
    status: u16,
    body: Value,
    raw: Vec<u8>,
}

struct PlaceQueryWorld {
    runner: actix_rt::SystemRunner,
    records: RefCell<Vec<PlaceRecord>>,
    last: RefCell<Option<Response>>,
    alias: RefCell<Option<Response>>,
}

impl PlaceQueryWorld {
    fn new() -> Self {
        Self {
            runner: actix_rt::System::new(),
            records: RefCell::new(Vec::new()),
            last: RefCell::new(None),
            alias: RefCell::new(None),
        }
    }

    fn get(&self, uri: &str) -> Response {
        let repository = InMemoryPlaceRepository::new(self.records.borrow().clone());
        let service = PlaceQueryService::new(
            Arc::new(repository),
            Arc::new(StaticCityAliases::new()),
        );
        let state = web::Data::new(HttpState::new(Arc::new(service)));
        self.runner.block_on(async move {
            let app = actix_test::init_service(
                App::new()
                    .app_data(state)
                    .service(web::scope("/api/v1").configure(places::configure)),
            )
            .await;
            let res =
                actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
            let status = res.status().as_u16();
            let raw = actix_test::read_body(res).await.to_vec();
            let body = serde_json::from_slice(&raw).expect("response body is JSON");
            Response { status, body, raw }
        })
    }

    fn with_last<F>(&self, f: F)
    where
        F: FnOnce(&Response),
    {
        let last = self.last.borrow();
        f(last.as_ref().expect("a request was made"));
    }

    fn listed(&self) -> Vec<Value> {
        let mut listed = Vec::new();
        self.with_last(|res| {
            listed = res.body["data"].as_array().cloned().expect("data array");
        });
        listed
    }
}

fn cafe(id: &str, city: Option<&str>, score: i16, tags: &[&str]) -> PlaceRecord {
    PlaceRecord {
        name: Some(format!("Cafe {id}")),
        city: city.map(str::to_owned),
        quality_score: Some(score),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        ..PlaceRecord::with_id(id)
    }
}

#[fixture]
fn world() -> PlaceQueryWorld {
    PlaceQueryWorld::new()
}

#[given("a catalogue of six coffee places")]
fn a_catalogue_of_six_coffee_places(world: &PlaceQueryWorld) {
    *world.records.borrow_mut() = vec![
        cafe("osm:node:1", Some("Hà Nội"), 9, &["wifi"]),
        cafe("osm:node:2", Some("hà nội"), 7, &["wifi", "quiet"]),
        cafe("osm:node:3", Some("Hà Nội "), 4, &[]),
        cafe("osm:node:4", Some("Hồ Chí Minh"), 8, &["wifi"]),
        cafe("osm:node:5", Some("Đà Lạt"), 6, &["roastery"]),
        cafe("osm:node:6", None, 2, &["WiFi"]),
    ];
}

#[when("the client compares {path} with {alias}")]
fn the_client_requests_both_routes(world: &PlaceQueryWorld, path: String, alias: String) {
    *world.last.borrow_mut() = Some(world.get(&path));
    *world.alias.borrow_mut() = Some(world.get(&alias));
}

#[when("the client requests {path}")]
fn the_client_requests(world: &PlaceQueryWorld, path: String) {
    *world.last.borrow_mut() = Some(world.get(&path));
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &PlaceQueryWorld, status: u16) {
    world.with_last(|res| assert_eq!(res.status, status, "body: {}", res.body));
}

#[then("the total is {total}")]
fn the_total_is(world: &PlaceQueryWorld, total: u64) {
    world.with_last(|res| assert_eq!(res.body["meta"]["total"].as_u64(), Some(total)));
}

#[then("every listed place has display city {city}")]
fn every_listed_place_has_display_city(world: &PlaceQueryWorld, city: String) {
    let listed = world.listed();
    assert!(!listed.is_empty());
    for place in listed {
        assert_eq!(place["city"].as_str(), Some(city.as_str()));
    }
}

#[then("no places are listed")]
fn no_places_are_listed(world: &PlaceQueryWorld) {
    assert!(world.listed().is_empty());
}

#[then("{count} place is listed")]
fn count_place_is_listed(world: &PlaceQueryWorld, count: usize) {
    assert_eq!(world.listed().len(), count);
}

#[then("the error details name the field {field}")]
fn the_error_details_name_the_field(world: &PlaceQueryWorld, field: String) {
    world.with_last(|res| {
        let details = res.body["details"].as_array().expect("details array");
        assert!(
            details.iter().any(|detail| detail["field"] == field.as_str()),
            "{field} not in {details:?}"
        );
    });
}

#[then("both responses are identical")]
fn both_responses_are_identical(world: &PlaceQueryWorld) {
    let alias = world.alias.borrow();
    let alias = alias.as_ref().expect("alias request was made");
    world.with_last(|res| {
        assert_eq!(res.status, alias.status);
        assert_eq!(res.raw, alias.raw);
    });
}

#[scenario(path = "tests/features/place_query.feature")]
fn place_query_scenarios(world: PlaceQueryWorld) {
    drop(world);
}
