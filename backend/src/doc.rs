//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated specification covering the item
//! catalog, collection point, and health endpoints. Swagger UI serves it
//! in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::items::ItemResponse;
use crate::inbound::http::points::PointResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ecoleta backend API",
        description = "HTTP interface for locating and registering recycling collection points.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::items::list_items,
        crate::inbound::http::points::get_all_points,
        crate::inbound::http::points::search_points,
        crate::inbound::http::points::get_point,
        crate::inbound::http::points::register_point,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Error, ErrorCode, ItemResponse, PointResponse)),
    tags(
        (name = "items", description = "Recyclable item catalog"),
        (name = "collectPoints", description = "Collection point registry and search"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
