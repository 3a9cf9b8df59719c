//! Warehouse API Library
//!
//! Back-office CRUD service for a warehouse: sellers, localities, buyers,
//! warehouses, employees, products and their records and batches, sections,
//! carriers, inbound and purchase orders, plus aggregation reports.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod middleware_helpers;
pub mod migrator;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod tracing;
pub mod utils;
pub mod validators;

use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
}

impl AppState {
    /// Wires every service over `db`.
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        let services = handlers::AppServices::new(db.clone());
        Self {
            db,
            config,
            services,
        }
    }
}

/// Resource routes mounted under `/api/v1`.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(handlers::health::status))
        .nest("/sellers", handlers::sellers::sellers_routes())
        .nest("/localities", handlers::localities::localities_routes())
        .nest("/buyers", handlers::buyers::buyers_routes())
        .nest("/warehouses", handlers::warehouses::warehouses_routes())
        .nest("/employees", handlers::employees::employees_routes())
        .nest("/products", handlers::products::products_routes())
        .nest(
            "/productRecords",
            handlers::product_records::product_records_routes(),
        )
        .nest(
            "/productBatches",
            handlers::product_batches::product_batches_routes(),
        )
        .nest("/sections", handlers::sections::sections_routes())
        .nest("/carries", handlers::carries::carries_routes())
        .nest(
            "/inboundOrders",
            handlers::inbound_orders::inbound_orders_routes(),
        )
        .nest(
            "/purchaseOrders",
            handlers::purchase_orders::purchase_orders_routes(),
        )
}

/// Complete application router with middleware, ready to serve.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(handlers::health::healthcheck))
        .route(openapi::OPENAPI_JSON_PATH, get(openapi::openapi_json))
        .nest("/api/v1", api_v1_routes())
        // HTTP tracing layer for consistent request/response telemetry
        .layer(crate::tracing::configure_http_tracing())
        .layer(axum::middleware::from_fn(
            crate::tracing::request_logging_middleware,
        ))
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id_middleware,
        ))
        .with_state(state)
}
