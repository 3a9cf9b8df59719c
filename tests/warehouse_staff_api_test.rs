mod common;

use axum::http::StatusCode;
use common::{id_of, TestApp};
use serde_json::json;

#[tokio::test]
async fn deleting_referenced_warehouse_conflicts() {
    let app = TestApp::new().await;
    for n in 1..=7 {
        app.create_warehouse(&format!("WH-{n:02}")).await;
    }
    app.create_employee("EMP-001", 7).await;

    let (status, body) = app.delete("/api/v1/warehouses/7").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "Conflict");

    let (status, _) = app.get("/api/v1/warehouses/7").await;
    assert_eq!(status, StatusCode::OK);

    // An unreferenced warehouse goes away.
    let (status, _) = app.delete("/api/v1/warehouses/6").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn warehouse_code_is_unique() {
    let app = TestApp::new().await;
    app.create_warehouse("WH-01").await;

    let (status, body) = app
        .post(
            "/api/v1/warehouses",
            json!({
                "warehouse_code": "WH-01",
                "address": "Otra calle 1",
                "telephone": "1100000000",
                "minimum_capacity": 10,
                "minimum_temperature": 2.5
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "WarehouseCode already in use");
}

#[tokio::test]
async fn warehouse_minimum_capacity_must_be_positive() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/warehouses",
            json!({
                "warehouse_code": "WH-01",
                "address": "Ruta 5",
                "telephone": "1100000000",
                "minimum_capacity": 0,
                "minimum_temperature": 2.5
            }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "minimum_capacity must be greater than 0");
}

#[tokio::test]
async fn employee_for_missing_warehouse_conflicts() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/employees",
            json!({
                "card_number_id": "EMP-001",
                "first_name": "Diego",
                "last_name": "Fernandez",
                "warehouse_id": 99
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Warehouse does not exist");
}

#[tokio::test]
async fn employee_patch_keeps_other_fields() {
    let app = TestApp::new().await;
    let warehouse = app.create_warehouse("WH-01").await;
    let other = app.create_warehouse("WH-02").await;
    let employee = app.create_employee("EMP-001", id_of(&warehouse)).await;

    let (status, body) = app
        .patch(
            &format!("/api/v1/employees/{}", id_of(&employee)),
            json!({"warehouse_id": id_of(&other)}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({
            "id": id_of(&employee),
            "card_number_id": "EMP-001",
            "first_name": "Diego",
            "last_name": "Fernandez",
            "warehouse_id": id_of(&other)
        })
    );
}

#[tokio::test]
async fn inbound_order_requires_existing_employee() {
    let app = TestApp::new().await;
    let warehouse = app.create_warehouse("WH-01").await;
    let product = app.create_product("PRD-1", None).await;
    let section = app.create_section(101, id_of(&warehouse)).await;
    let batch = app
        .create_product_batch(5001, id_of(&product), id_of(&section))
        .await;

    let (status, body) = app
        .post(
            "/api/v1/inboundOrders",
            json!({
                "order_number": "IN-1",
                "order_date": "2024-07-01T09:30:00Z",
                "employee_id": 42,
                "warehouse_id": id_of(&warehouse),
                "product_batch_id": id_of(&batch)
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Employee does not exist");
}

#[tokio::test]
async fn inbound_orders_report_counts_per_employee() {
    let app = TestApp::new().await;
    let warehouse = app.create_warehouse("WH-01").await;
    let diego = app.create_employee("EMP-001", id_of(&warehouse)).await;
    app.create_employee("EMP-002", id_of(&warehouse)).await;
    let product = app.create_product("PRD-1", None).await;
    let section = app.create_section(101, id_of(&warehouse)).await;
    let batch = app
        .create_product_batch(5001, id_of(&product), id_of(&section))
        .await;

    let order = json!({
        "order_number": "IN-1",
        "order_date": "2024-07-01 09:30:00",
        "employee_id": id_of(&diego),
        "warehouse_id": id_of(&warehouse),
        "product_batch_id": id_of(&batch)
    });
    let created = app.create("/api/v1/inboundOrders", order.clone()).await;
    assert_eq!(created["order_date"], "2024-07-01T09:30:00");

    let (status, body) = app.post("/api/v1/inboundOrders", order).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "OrderNumber already in use");

    let (status, body) = app.get("/api/v1/employees/reportInboundOrders").await;
    assert_eq!(status, StatusCode::OK);
    let counts: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["inbound_orders_count"].as_i64().unwrap())
        .collect();
    assert_eq!(counts, vec![1, 0]);

    let (status, body) = app
        .get(&format!(
            "/api/v1/employees/reportInboundOrders?id={}",
            id_of(&diego)
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({
            "id": id_of(&diego),
            "card_number_id": "EMP-001",
            "first_name": "Diego",
            "last_name": "Fernandez",
            "warehouse_id": id_of(&warehouse),
            "inbound_orders_count": 1
        })
    );

    let (status, body) = app.get("/api/v1/employees/reportInboundOrders?id=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid Id");
}

#[tokio::test]
async fn sections_report_counts_batches() {
    let app = TestApp::new().await;
    let warehouse = app.create_warehouse("WH-01").await;
    let product = app.create_product("PRD-1", None).await;
    let full = app.create_section(101, id_of(&warehouse)).await;
    app.create_section(102, id_of(&warehouse)).await;
    app.create_product_batch(5001, id_of(&product), id_of(&full))
        .await;
    app.create_product_batch(5002, id_of(&product), id_of(&full))
        .await;

    let (status, body) = app.get("/api/v1/sections/reportProducts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!([
            {"section_id": 1, "section_number": 101, "products_count": 2},
            {"section_id": 2, "section_number": 102, "products_count": 0}
        ])
    );

    let (status, _) = app.get("/api/v1/sections/reportProducts?id=3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn batch_with_invalid_hour_is_unprocessable() {
    let app = TestApp::new().await;
    let warehouse = app.create_warehouse("WH-01").await;
    let product = app.create_product("PRD-1", None).await;
    let section = app.create_section(101, id_of(&warehouse)).await;

    let (status, body) = app
        .post(
            "/api/v1/productBatches",
            json!({
                "batch_number": 5001,
                "current_quantity": 1,
                "current_temperature": -18.0,
                "due_date": "2025-06-30",
                "initial_quantity": 1,
                "manufacturing_date": "2024-06-30",
                "manufacturing_hour": 24,
                "minimum_temperature": -25.0,
                "product_id": id_of(&product),
                "section_id": id_of(&section)
            }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "manufacturing_hour must be between 0 and 23");
}
