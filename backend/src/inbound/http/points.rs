//! Collection point endpoints.
//!
//! ```text
//! GET  /collectPoints/GetAll  List every registered point
//! GET  /collectPoints          Filter points by city/zipcode/items
//! GET  /collectPoints/{id}     Fetch one point with its items
//! POST /collectPoints          Register a new point (multipart form)
//! ```

use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{
    ImageUpload, PointRepositoryError, PointSearchFilter, RegistrationRequest,
};
use crate::domain::{AssetUrlBase, CollectPoint, CollectPointInput, Error};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    missing_field_error, parse_f64, parse_item_ids, FieldName,
};
use crate::inbound::http::ApiResult;

/// Wire representation of a collection point with its accepted items.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PointResponse {
    /// Store-assigned point identifier.
    #[serde(rename = "collectPointId")]
    pub collect_point_id: i32,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub zipcode: String,
    /// Absolute URL of the point photo.
    #[schema(example = "http://localhost:3333/assets/0a1b-front.jpg")]
    pub image_url: String,
    /// Identifiers of the items this point accepts.
    pub items: Vec<i32>,
}

impl PointResponse {
    fn from_point(point: &CollectPoint, assets: &AssetUrlBase) -> Self {
        Self {
            collect_point_id: point.id(),
            name: point.name().to_owned(),
            email: point.email().to_owned(),
            whatsapp: point.whatsapp().to_owned(),
            latitude: point.latitude(),
            longitude: point.longitude(),
            city: point.city().to_owned(),
            zipcode: point.zipcode().to_owned(),
            image_url: assets.resolve(point.image()),
            items: point.item_ids().to_vec(),
        }
    }
}

fn map_repository_error(error: PointRepositoryError) -> Error {
    Error::internal(error.to_string())
}

fn points_body(points: &[CollectPoint], assets: &AssetUrlBase) -> Vec<PointResponse> {
    points
        .iter()
        .map(|point| PointResponse::from_point(point, assets))
        .collect()
}

/// List every registered collection point.
#[utoipa::path(
    get,
    path = "/collectPoints/GetAll",
    responses(
        (status = 200, description = "All registered points", body = [PointResponse]),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["collectPoints"],
    operation_id = "listCollectPoints"
)]
#[get("/collectPoints/GetAll")]
pub async fn get_all_points(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let points = state.points.list_all().await.map_err(map_repository_error)?;
    Ok(HttpResponse::Ok().json(points_body(&points, &state.assets)))
}

/// Query parameters for the point search endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Case-sensitive substring to match against the city field.
    pub city: Option<String>,
    /// Case-sensitive substring to match against the zipcode field.
    pub zipcode: Option<String>,
    /// Comma-separated item ids; points must accept at least one.
    pub items: Option<String>,
}

/// Filter collection points by city, zipcode, and accepted items.
///
/// Omitted parameters apply no constraint; a point accepting several of
/// the requested items is returned once.
#[utoipa::path(
    get,
    path = "/collectPoints",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching points", body = [PointResponse]),
        (status = 400, description = "Malformed items list", body = Error),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["collectPoints"],
    operation_id = "searchCollectPoints"
)]
#[get("/collectPoints")]
pub async fn search_points(
    state: web::Data<HttpState>,
    query: web::Query<SearchQuery>,
) -> ApiResult<HttpResponse> {
    let SearchQuery {
        city,
        zipcode,
        items,
    } = query.into_inner();

    let item_ids = items
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| parse_item_ids(raw, FieldName::new("items")))
        .transpose()?;

    let filter = PointSearchFilter {
        city: city.unwrap_or_default(),
        zipcode: zipcode.unwrap_or_default(),
        item_ids,
    };

    let points = state
        .points
        .search(filter)
        .await
        .map_err(map_repository_error)?;
    Ok(HttpResponse::Ok().json(points_body(&points, &state.assets)))
}

/// Fetch a single collection point with its accepted items.
#[utoipa::path(
    get,
    path = "/collectPoints/{id}",
    params(("id" = i32, Path, description = "Point identifier")),
    responses(
        (status = 200, description = "The point", body = PointResponse),
        (status = 400, description = "Point not found", body = Error),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["collectPoints"],
    operation_id = "getCollectPoint"
)]
#[get("/collectPoints/{id}")]
pub async fn get_point(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let point = state
        .points
        .find_by_id(id)
        .await
        .map_err(map_repository_error)?
        .ok_or_else(|| Error::not_found("Point not found."))?;
    Ok(HttpResponse::Ok().json(PointResponse::from_point(&point, &state.assets)))
}

/// Multipart form for collection point registration.
///
/// All fields are optional at the extractor level so missing ones surface
/// as structured validation errors instead of a bare 400.
#[derive(Debug, MultipartForm)]
pub struct RegisterPointForm {
    pub name: Option<Text<String>>,
    pub email: Option<Text<String>>,
    pub whatsapp: Option<Text<String>>,
    pub latitude: Option<Text<String>>,
    pub longitude: Option<Text<String>>,
    pub city: Option<Text<String>>,
    pub zipcode: Option<Text<String>>,
    pub items: Option<Text<String>>,
    pub image: Option<TempFile>,
}

fn require_text(value: Option<Text<String>>, field: &'static str) -> Result<String, Error> {
    value
        .map(Text::into_inner)
        .ok_or_else(|| missing_field_error(FieldName::new(field)))
}

async fn form_to_request(form: RegisterPointForm) -> Result<RegistrationRequest, Error> {
    let RegisterPointForm {
        name,
        email,
        whatsapp,
        latitude,
        longitude,
        city,
        zipcode,
        items,
        image,
    } = form;

    let latitude = parse_f64(
        &require_text(latitude, "latitude")?,
        FieldName::new("latitude"),
    )?;
    let longitude = parse_f64(
        &require_text(longitude, "longitude")?,
        FieldName::new("longitude"),
    )?;
    let item_ids = parse_item_ids(&require_text(items, "items")?, FieldName::new("items"))?;

    let input = CollectPointInput {
        name: require_text(name, "name")?,
        email: require_text(email, "email")?,
        whatsapp: require_text(whatsapp, "whatsapp")?,
        latitude,
        longitude,
        city: require_text(city, "city")?,
        zipcode: require_text(zipcode, "zipcode")?,
    };

    let image = image.ok_or_else(|| missing_field_error(FieldName::new("image")))?;
    let file_name = image
        .file_name
        .clone()
        .unwrap_or_else(|| "upload".to_owned());
    let bytes = tokio::fs::read(image.file.path())
        .await
        .map_err(|err| Error::internal(format!("failed to read upload: {err}")))?;

    Ok(RegistrationRequest {
        input,
        item_ids,
        image: ImageUpload { file_name, bytes },
    })
}

/// Register a new collection point.
///
/// The point row and its item associations are committed in a single
/// transaction; a validation failure or unknown item id leaves nothing
/// persisted.
#[utoipa::path(
    post,
    path = "/collectPoints",
    request_body(content = String, content_type = "multipart/form-data",
        description = "Point profile fields, comma-separated item ids, and an image file"),
    responses(
        (status = 200, description = "The created point", body = PointResponse),
        (status = 400, description = "Validation failure", body = Error),
        (status = 500, description = "Store or transaction failure", body = Error)
    ),
    tags = ["collectPoints"],
    operation_id = "registerCollectPoint"
)]
#[post("/collectPoints")]
pub async fn register_point(
    state: web::Data<HttpState>,
    form: MultipartForm<RegisterPointForm>,
) -> ApiResult<HttpResponse> {
    let request = form_to_request(form.into_inner()).await?;
    let point = state.registration.register(request).await?;
    Ok(HttpResponse::Ok().json(PointResponse::from_point(&point, &state.assets)))
}
