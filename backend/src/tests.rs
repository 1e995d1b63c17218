//! Tests for the application bootstrap, covering place source selection and
//! readiness signalling.

use std::path::PathBuf;

use super::server::{ServerConfig, create_server};
use backend::inbound::http::health::HealthState;
use actix_web::web;
use rstest::{fixture, rstest};

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn config() -> ServerConfig {
    ServerConfig::new("127.0.0.1:0".parse().expect("loopback address"))
}

#[rstest]
fn server_config_keeps_the_bind_address(config: ServerConfig) {
    assert_eq!(config.bind_addr().port(), 0);
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(health_state: web::Data<HealthState>, config: ServerConfig) {
    assert!(!health_state.is_ready(), "state should start unready");
    let _server = create_server(health_state.clone(), config).expect("server starts");
    assert!(health_state.is_ready(), "server creation should mark readiness");
}

#[rstest]
#[actix_rt::test]
async fn bundled_fixture_serves_as_a_place_source(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) {
    let fixture = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/places.json");
    let _server =
        create_server(health_state.clone(), config.with_fixture(fixture)).expect("server starts");
    assert!(health_state.is_ready());
}

#[rstest]
#[actix_rt::test]
async fn missing_fixture_fails_startup(health_state: web::Data<HealthState>, config: ServerConfig) {
    let fixture = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/absent.json");
    let result = create_server(health_state.clone(), config.with_fixture(fixture));
    assert!(result.is_err());
    assert!(!health_state.is_ready());
}
