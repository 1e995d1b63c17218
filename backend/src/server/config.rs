//! Startup settings and the server configuration built from them.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use backend::outbound::persistence::DbPool;

/// Settings layered from `PLACES_*` environment variables, an optional
/// config file and command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PLACES")]
pub struct ServerSettings {
    /// Interface to listen on.
    pub bind_host: Option<IpAddr>,
    /// Port to listen on.
    #[ortho_config(default = 8080)]
    pub bind_port: u16,
    /// PostgreSQL URL. Without it places are served from `fixture_path`.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
    /// JSON file of place records for the in-memory store.
    pub fixture_path: Option<PathBuf>,
}

impl ServerSettings {
    /// Listen address, defaulting the host to `0.0.0.0`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.bind_host.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            self.bind_port,
        )
    }

    /// Database URL with blank values treated as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Where the place repository reads from.
pub enum PlaceSource {
    Database(DbPool),
    Fixture(PathBuf),
    Empty,
}

/// Resolved configuration handed to [`super::create_server`].
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) places: PlaceSource,
}

impl ServerConfig {
    /// Serve an empty store until a source is attached.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            places: PlaceSource::Empty,
        }
    }

    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.places = PlaceSource::Database(pool);
        self
    }

    #[must_use]
    pub fn with_fixture(mut self, path: PathBuf) -> Self {
        self.places = PlaceSource::Fixture(path);
        self
    }

    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Read by bootstrap tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
