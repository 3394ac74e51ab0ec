//! HTTP server configuration object.

use std::net::SocketAddr;
use std::path::PathBuf;

use ecoleta_backend::domain::AssetUrlBase;
use ecoleta_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) assets_dir: PathBuf,
    pub(crate) assets: AssetUrlBase,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration from the resolved settings.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, assets_dir: PathBuf, assets: AssetUrlBase) -> Self {
        Self {
            bind_addr,
            assets_dir,
            assets,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// When provided, the server uses database-backed implementations for
    /// the item and point ports; without it, fixture implementations serve
    /// canned data for local development and tests.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// The socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
