//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};

#[cfg(debug_assertions)]
use ecoleta_backend::doc::ApiDoc;
use ecoleta_backend::domain::ports::{
    FixtureItemRepository, FixturePointRepository, FixtureRegistrationService, ItemRepository,
    PointRepository, RegistrationService,
};
use ecoleta_backend::domain::RegistrationServiceImpl;
use ecoleta_backend::inbound::http::health::{live, ready, HealthState};
use ecoleta_backend::inbound::http::items::list_items;
use ecoleta_backend::inbound::http::points::{
    get_all_points, get_point, register_point, search_points,
};
use ecoleta_backend::inbound::http::state::HttpState;
use ecoleta_backend::outbound::persistence::{DieselItemRepository, DieselPointRepository};
use ecoleta_backend::outbound::storage::FsImageStore;
use ecoleta_backend::Trace;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the shared HTTP state from configured ports.
///
/// A configured pool selects the database-backed adapters; without one the
/// fixture implementations serve canned data so the server still starts
/// for local development.
fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (items, points, registration): (
        Arc<dyn ItemRepository>,
        Arc<dyn PointRepository>,
        Arc<dyn RegistrationService>,
    ) = match &config.db_pool {
        Some(pool) => {
            let point_repo = Arc::new(DieselPointRepository::new(pool.clone()));
            let image_store = Arc::new(FsImageStore::new(config.assets_dir.clone()));
            (
                Arc::new(DieselItemRepository::new(pool.clone())),
                point_repo.clone(),
                Arc::new(RegistrationServiceImpl::new(point_repo, image_store)),
            )
        }
        None => (
            Arc::new(FixtureItemRepository),
            Arc::new(FixturePointRepository),
            Arc::new(FixtureRegistrationService),
        ),
    };

    web::Data::new(HttpState::new(
        items,
        points,
        registration,
        config.assets.clone(),
    ))
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    assets_dir: std::path::PathBuf,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        assets_dir,
    } = deps;

    // The static GetAll route must register before the {id} matcher.
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(list_items)
        .service(get_all_points)
        .service(search_points)
        .service(get_point)
        .service(register_point)
        .service(ready)
        .service(live)
        .service(actix_files::Files::new("/assets", assets_dir));

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server from the provided health state and
/// configuration.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let assets_dir = config.assets_dir.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            assets_dir: assets_dir.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
