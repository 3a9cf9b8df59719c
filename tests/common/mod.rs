#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Schema};
use serde_json::{json, Value};
use tower::ServiceExt;
use warehouse_api::{build_router, config::AppConfig, db, entities, AppState};

/// Helper harness for spinning up the application backed by an in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) {
    let backend = db.get_database_backend();
    let stmt = Schema::new(backend).create_table_from_entity(entity);
    db.execute(backend.build(&stmt))
        .await
        .expect("failed to create table");
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        // One connection: every pooled connection to `sqlite::memory:` is its own database.
        let cfg = AppConfig {
            database_url: Some("sqlite::memory:".to_string()),
            db_max_connections: 1,
            db_min_connections: 1,
            ..AppConfig::default()
        };

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");

        // Parents before children so foreign keys resolve.
        create_table(&pool, entities::locality::Entity).await;
        create_table(&pool, entities::seller::Entity).await;
        create_table(&pool, entities::buyer::Entity).await;
        create_table(&pool, entities::warehouse::Entity).await;
        create_table(&pool, entities::employee::Entity).await;
        create_table(&pool, entities::product::Entity).await;
        create_table(&pool, entities::product_record::Entity).await;
        create_table(&pool, entities::section::Entity).await;
        create_table(&pool, entities::product_batch::Entity).await;
        create_table(&pool, entities::carry::Entity).await;
        create_table(&pool, entities::inbound_order::Entity).await;
        create_table(&pool, entities::purchase_order::Entity).await;

        let state = AppState::new(Arc::new(pool), cfg);
        let router = build_router(state.clone());
        Self { router, state }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Sends a body verbatim, for payloads that are not valid JSON.
    pub async fn request_raw(&self, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("failed to build request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request");
        read_json(response).await
    }

    /// Status and decoded body; an empty body decodes to `null`.
    pub async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        read_json(self.request(method, uri, body).await).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.call(Method::POST, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.call(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::DELETE, uri, None).await
    }

    /// Creates a resource and returns the stored entity, failing the test on any other status.
    pub async fn create(&self, uri: &str, body: Value) -> Value {
        let (status, body) = self.post(uri, body).await;
        assert_eq!(status, StatusCode::CREATED, "create {uri} failed: {body}");
        body["data"].clone()
    }

    pub async fn create_locality(&self, id: &str, name: &str) -> Value {
        self.create(
            "/api/v1/localities",
            json!({
                "id": id,
                "locality_name": name,
                "province_name": "Buenos Aires",
                "country_name": "Argentina"
            }),
        )
        .await
    }

    pub async fn create_seller(&self, cid: i32, locality_id: &str) -> Value {
        self.create(
            "/api/v1/sellers",
            json!({
                "cid": cid,
                "company_name": format!("Company {cid}"),
                "address": "Calle Falsa 123",
                "telephone": "1145678901",
                "locality_id": locality_id
            }),
        )
        .await
    }

    pub async fn create_buyer(&self, card_number_id: i64, first_name: &str, last_name: &str) -> Value {
        self.create(
            "/api/v1/buyers",
            json!({
                "card_number_id": card_number_id,
                "first_name": first_name,
                "last_name": last_name
            }),
        )
        .await
    }

    pub async fn create_warehouse(&self, code: &str) -> Value {
        self.create(
            "/api/v1/warehouses",
            json!({
                "warehouse_code": code,
                "address": "Ruta 5 km 62",
                "telephone": "2323445566",
                "minimum_capacity": 100,
                "minimum_temperature": -18.0
            }),
        )
        .await
    }

    pub async fn create_employee(&self, card: &str, warehouse_id: i64) -> Value {
        self.create(
            "/api/v1/employees",
            json!({
                "card_number_id": card,
                "first_name": "Diego",
                "last_name": "Fernandez",
                "warehouse_id": warehouse_id
            }),
        )
        .await
    }

    pub async fn create_product(&self, code: &str, seller_id: Option<i64>) -> Value {
        self.create(
            "/api/v1/products",
            json!({
                "description": "Frozen peas",
                "expiration_rate": 0.7,
                "freezing_rate": 0.9,
                "height": 20.0,
                "length": 15.0,
                "width": 5.0,
                "net_weight": 1.0,
                "product_code": code,
                "recommended_freezing_temperature": -18.0,
                "product_type_id": 1,
                "seller_id": seller_id
            }),
        )
        .await
    }

    pub async fn create_product_record(&self, product_id: i64) -> Value {
        self.create(
            "/api/v1/productRecords",
            json!({
                "last_update_date": "2024-01-10",
                "purchase_price": 100.0,
                "sale_price": 150.0,
                "product_id": product_id
            }),
        )
        .await
    }

    pub async fn create_section(&self, number: i32, warehouse_id: i64) -> Value {
        self.create(
            "/api/v1/sections",
            json!({
                "section_number": number,
                "current_temperature": -18.0,
                "minimum_temperature": -25.0,
                "current_capacity": 10,
                "minimum_capacity": 5,
                "maximum_capacity": 100,
                "warehouse_id": warehouse_id,
                "product_type_id": 1
            }),
        )
        .await
    }

    pub async fn create_product_batch(&self, number: i32, product_id: i64, section_id: i64) -> Value {
        self.create(
            "/api/v1/productBatches",
            json!({
                "batch_number": number,
                "current_quantity": 150,
                "current_temperature": -18.0,
                "due_date": "2025-06-30",
                "initial_quantity": 200,
                "manufacturing_date": "2024-06-30",
                "manufacturing_hour": 8,
                "minimum_temperature": -25.0,
                "product_id": product_id,
                "section_id": section_id
            }),
        )
        .await
    }
}

pub async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is not JSON")
    };
    (status, value)
}

/// The `id` of a created entity.
pub fn id_of(entity: &Value) -> i64 {
    entity["id"].as_i64().expect("entity without numeric id")
}
