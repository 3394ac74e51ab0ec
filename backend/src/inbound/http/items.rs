//! Item catalog endpoint.
//!
//! ```text
//! GET /items  List recyclable item categories
//! ```

use actix_web::{get, web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{AssetUrlBase, Error, Item};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Wire representation of a recyclable item category.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ItemResponse {
    /// Stable item identifier.
    #[serde(rename = "itemId")]
    pub item_id: i32,
    /// Human-readable category title.
    pub title: String,
    /// Absolute URL of the category icon.
    #[schema(example = "http://localhost:3333/assets/lampadas.svg")]
    pub image_url: String,
}

impl ItemResponse {
    fn from_item(item: &Item, assets: &AssetUrlBase) -> Self {
        Self {
            item_id: item.id(),
            title: item.title().to_owned(),
            image_url: assets.resolve(item.image()),
        }
    }
}

/// List all recyclable item categories.
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "Item catalog", body = [ItemResponse]),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["items"],
    operation_id = "listItems"
)]
#[get("/items")]
pub async fn list_items(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let items = state
        .items
        .list_items()
        .await
        .map_err(|err| Error::internal(err.to_string()))?;
    let body: Vec<ItemResponse> = items
        .iter()
        .map(|item| ItemResponse::from_item(item, &state.assets))
        .collect();
    Ok(HttpResponse::Ok().json(body))
}
