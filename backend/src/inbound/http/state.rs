//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ItemRepository, PointRepository, RegistrationService};
use crate::domain::AssetUrlBase;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub items: Arc<dyn ItemRepository>,
    pub points: Arc<dyn PointRepository>,
    pub registration: Arc<dyn RegistrationService>,
    /// Public base under which stored asset filenames are served.
    pub assets: AssetUrlBase,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use ecoleta_backend::domain::ports::{
    ///     FixtureItemRepository, FixturePointRepository, FixtureRegistrationService,
    /// };
    /// use ecoleta_backend::domain::AssetUrlBase;
    /// use ecoleta_backend::inbound::http::state::HttpState;
    ///
    /// let assets = AssetUrlBase::parse("http://localhost:3333/assets").expect("valid base");
    /// let state = HttpState::new(
    ///     Arc::new(FixtureItemRepository),
    ///     Arc::new(FixturePointRepository),
    ///     Arc::new(FixtureRegistrationService),
    ///     assets,
    /// );
    /// let _items = state.items.clone();
    /// ```
    pub fn new(
        items: Arc<dyn ItemRepository>,
        points: Arc<dyn PointRepository>,
        registration: Arc<dyn RegistrationService>,
        assets: AssetUrlBase,
    ) -> Self {
        Self {
            items,
            points,
            registration,
            assets,
        }
    }
}
