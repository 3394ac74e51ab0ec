//! End-to-end HTTP tests over in-memory adapters.
//!
//! The full registration flow runs against a real filesystem image store
//! and an in-memory point repository implementing the same contract as
//! the PostgreSQL adapter.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::{http::StatusCode, test as actix_test, web, App};
use async_trait::async_trait;
use serde_json::Value;

use ecoleta_backend::domain::ports::{
    FixtureItemRepository, NewCollectPoint, PointRepository, PointRepositoryError,
    PointSearchFilter,
};
use ecoleta_backend::domain::{
    AssetUrlBase, CollectPoint, CollectPointDraft, RegistrationServiceImpl,
};
use ecoleta_backend::inbound::http::health::{live, ready, HealthState};
use ecoleta_backend::inbound::http::items::list_items;
use ecoleta_backend::inbound::http::points::{
    get_all_points, get_point, register_point, search_points,
};
use ecoleta_backend::inbound::http::state::HttpState;
use ecoleta_backend::outbound::storage::FsImageStore;

const KNOWN_ITEM_IDS: [i32; 6] = [1, 2, 3, 4, 5, 6];

/// In-memory point repository honouring the persistence contract.
#[derive(Default)]
struct InMemoryPointRepository {
    points: Mutex<Vec<CollectPoint>>,
    next_id: AtomicI32,
}

impl InMemoryPointRepository {
    fn new() -> Self {
        Self {
            points: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    fn snapshot(&self) -> Vec<CollectPoint> {
        self.points.lock().expect("repository lock").clone()
    }
}

#[async_trait]
impl PointRepository for InMemoryPointRepository {
    async fn list_all(&self) -> Result<Vec<CollectPoint>, PointRepositoryError> {
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CollectPoint>, PointRepositoryError> {
        Ok(self.snapshot().into_iter().find(|point| point.id() == id))
    }

    async fn search(
        &self,
        filter: PointSearchFilter,
    ) -> Result<Vec<CollectPoint>, PointRepositoryError> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|point| {
                point.city().contains(&filter.city)
                    && point.zipcode().contains(&filter.zipcode)
                    && filter.item_ids.as_ref().is_none_or(|ids| {
                        ids.iter().any(|id| point.item_ids().contains(id))
                    })
            })
            .collect())
    }

    async fn create(
        &self,
        point: NewCollectPoint,
        item_ids: Vec<i32>,
    ) -> Result<CollectPoint, PointRepositoryError> {
        if let Some(unknown) = item_ids.iter().find(|id| !KNOWN_ITEM_IDS.contains(id)) {
            return Err(PointRepositoryError::unknown_item(format!(
                "item {unknown} does not exist"
            )));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = CollectPoint::new(CollectPointDraft {
            id,
            image: point.image,
            input: point.input,
            item_ids,
        })
        .map_err(|err| PointRepositoryError::query(err.to_string()))?;
        self.points
            .lock()
            .expect("repository lock")
            .push(created.clone());
        Ok(created)
    }
}

struct TestServer {
    state: HttpState,
    health: web::Data<HealthState>,
    _assets_dir: tempfile::TempDir,
}

fn test_server() -> TestServer {
    let assets_dir = tempfile::tempdir().expect("tempdir");
    let points = Arc::new(InMemoryPointRepository::new());
    let images = Arc::new(FsImageStore::new(assets_dir.path()));
    let registration = Arc::new(RegistrationServiceImpl::new(points.clone(), images));
    let state = HttpState::new(
        Arc::new(FixtureItemRepository),
        points,
        registration,
        AssetUrlBase::parse("http://localhost:3333/assets").expect("valid base"),
    );
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    TestServer {
        state,
        health,
        _assets_dir: assets_dir,
    }
}

async fn call(
    server: &TestServer,
    request: actix_http::Request,
) -> actix_web::dev::ServiceResponse {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(server.state.clone()))
            .app_data(server.health.clone())
            .service(list_items)
            .service(get_all_points)
            .service(search_points)
            .service(get_point)
            .service(register_point)
            .service(ready)
            .service(live),
    )
    .await;
    actix_test::call_service(&app, request).await
}

fn multipart_body(fields: &[(&str, &str)], image: Option<(&str, &[u8])>) -> (String, Vec<u8>) {
    let boundary = "ecoleta-e2e-boundary";
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={boundary}"), body)
}

async fn register(
    server: &TestServer,
    name: &str,
    city: &str,
    zipcode: &str,
    items: &str,
) -> Value {
    let fields = [
        ("name", name),
        ("email", "contact@x.com"),
        ("whatsapp", "911111111"),
        ("latitude", "41.14"),
        ("longitude", "-8.61"),
        ("city", city),
        ("zipcode", zipcode),
        ("items", items),
    ];
    let (content_type, body) = multipart_body(&fields, Some(("front.jpg", &[0xFF, 0xD8])));
    let response = call(
        server,
        actix_test::TestRequest::post()
            .uri("/collectPoints")
            .insert_header(("content-type", content_type))
            .set_payload(body)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    actix_test::read_body_json(response).await
}

async fn get_json(server: &TestServer, uri: &str) -> (StatusCode, Value) {
    let response = call(server, actix_test::TestRequest::get().uri(uri).to_request()).await;
    let status = response.status();
    (status, actix_test::read_body_json(response).await)
}

#[actix_web::test]
async fn registration_flow_round_trips_through_every_endpoint() {
    let server = test_server();

    let created = register(&server, "EcoPonto A", "Porto", "4430", "1,2").await;
    let id = created["collectPointId"].as_i64().expect("point id");
    assert_eq!(created["items"], serde_json::json!([1, 2]));
    let image_url = created["image_url"].as_str().expect("image url");
    assert!(image_url.starts_with("http://localhost:3333/assets/"));
    assert!(image_url.ends_with("-front.jpg"));

    register(&server, "EcoPonto B", "Lisboa", "1000", "3").await;

    let (status, point) = get_json(&server, &format!("/collectPoints/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(point["name"], "EcoPonto A");
    assert_eq!(point["items"], serde_json::json!([1, 2]));

    let (status, all) = get_json(&server, "/collectPoints/GetAll").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().expect("array").len(), 2);
}

#[actix_web::test]
async fn search_filters_by_city_zipcode_and_items() {
    let server = test_server();
    register(&server, "EcoPonto A", "Porto", "4430", "1,2").await;
    register(&server, "EcoPonto B", "Lisboa", "1000", "3").await;

    let (status, matches) =
        get_json(&server, "/collectPoints?city=Porto&zipcode=44&items=2").await;
    assert_eq!(status, StatusCode::OK);
    let matches = matches.as_array().expect("array");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["name"], "EcoPonto A");

    // A point accepting several requested items appears exactly once.
    let (_, multi) = get_json(&server, "/collectPoints?items=1,2").await;
    assert_eq!(multi.as_array().expect("array").len(), 1);

    let (_, lisbon_only) = get_json(&server, "/collectPoints?city=Lisboa").await;
    let lisbon_only = lisbon_only.as_array().expect("array");
    assert_eq!(lisbon_only.len(), 1);
    assert_eq!(lisbon_only[0]["name"], "EcoPonto B");

    // Omitted parameters apply no constraint.
    let (_, unfiltered) = get_json(&server, "/collectPoints").await;
    assert_eq!(unfiltered.as_array().expect("array").len(), 2);
}

#[actix_web::test]
async fn missing_point_reports_the_legacy_not_found_message() {
    let server = test_server();
    let (status, body) = get_json(&server, "/collectPoints/99").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Point not found.");
}

#[actix_web::test]
async fn unknown_item_rejects_the_whole_registration() {
    let server = test_server();

    let fields = [
        ("name", "EcoPonto C"),
        ("email", "c@x.com"),
        ("whatsapp", "933333333"),
        ("latitude", "40.0"),
        ("longitude", "-8.0"),
        ("city", "Braga"),
        ("zipcode", "4700"),
        ("items", "1,99"),
    ];
    let (content_type, body) = multipart_body(&fields, Some(("front.jpg", &[0xFF])));
    let response = call(
        &server,
        actix_test::TestRequest::post()
            .uri("/collectPoints")
            .insert_header(("content-type", content_type))
            .set_payload(body)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing persisted from the failed registration.
    let (_, all) = get_json(&server, "/collectPoints/GetAll").await;
    assert!(all.as_array().expect("array").is_empty());
}

#[actix_web::test]
async fn items_catalog_resolves_absolute_urls() {
    let server = test_server();
    let (status, items) = get_json(&server, "/items").await;
    assert_eq!(status, StatusCode::OK);
    let items = items.as_array().expect("array");
    assert!(!items.is_empty());
    for item in items {
        assert!(item["image_url"]
            .as_str()
            .expect("image url")
            .starts_with("http://localhost:3333/assets/"));
    }
}

#[actix_web::test]
async fn health_probes_respond() {
    let server = test_server();
    let response = call(
        &server,
        actix_test::TestRequest::get().uri("/health/ready").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = call(
        &server,
        actix_test::TestRequest::get().uri("/health/live").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
