mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{id_of, TestApp};
use serde_json::json;

#[tokio::test]
async fn product_round_trips_through_the_api() {
    let app = TestApp::new().await;
    let product = app.create_product("PRD-1", None).await;

    let (status, body) = app
        .get(&format!("/api/v1/products/{}", id_of(&product)))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], product);
    assert_eq!(product["seller_id"], json!(null));
    assert_eq!(product["product_code"], "PRD-1");
}

#[tokio::test]
async fn product_code_is_unique() {
    let app = TestApp::new().await;
    app.create_product("PRD-1", None).await;
    let other = app.create_product("PRD-2", None).await;

    let (status, body) = app
        .patch(
            &format!("/api/v1/products/{}", id_of(&other)),
            json!({"product_code": "PRD-1"}),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "ProductCode already in use");
}

#[tokio::test]
async fn product_for_unknown_seller_conflicts() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/products",
            json!({
                "description": "Peas",
                "expiration_rate": 0.7,
                "freezing_rate": 0.9,
                "height": 20.0,
                "length": 15.0,
                "width": 5.0,
                "net_weight": 1.0,
                "product_code": "PRD-1",
                "recommended_freezing_temperature": -18.0,
                "product_type_id": 1,
                "seller_id": 77
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Seller does not exist");
}

#[tokio::test]
async fn sale_price_below_purchase_price_is_unprocessable() {
    let app = TestApp::new().await;
    let product = app.create_product("PRD-1", None).await;

    let (status, body) = app
        .post(
            "/api/v1/productRecords",
            json!({
                "last_update_date": "2024-01-10",
                "purchase_price": 100.0,
                "sale_price": 99.99,
                "product_id": id_of(&product)
            }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["message"],
        "sale_price must be greater than or equal to purchase_price"
    );

    // The same rule holds for a patch that only touches one price.
    let record = app.create_product_record(id_of(&product)).await;
    let (status, _) = app
        .patch(
            &format!("/api/v1/productRecords/{}", id_of(&record)),
            json!({"purchase_price": 500.0}),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, stored) = app
        .get(&format!("/api/v1/productRecords/{}", id_of(&record)))
        .await;
    assert_eq!(stored["data"]["purchase_price"], 100.0);
}

#[tokio::test]
async fn record_for_unknown_product_conflicts() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/productRecords",
            json!({
                "last_update_date": "2024-01-10",
                "purchase_price": 1.0,
                "sale_price": 2.0,
                "product_id": 5
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Product does not exist");
}

#[tokio::test]
async fn records_report_counts_per_product() {
    let app = TestApp::new().await;
    let peas = app.create_product("PRD-1", None).await;
    app.create_product("PRD-2", None).await;
    app.create_product_record(id_of(&peas)).await;
    app.create_product_record(id_of(&peas)).await;
    app.create_product_record(id_of(&peas)).await;

    let (status, body) = app.get("/api/v1/products/reportRecords").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!([
            {"product_id": 1, "description": "Frozen peas", "records_count": 3},
            {"product_id": 2, "description": "Frozen peas", "records_count": 0}
        ])
    );

    let (status, body) = app.get("/api/v1/products/reportRecords?id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["records_count"], 3);

    let (status, _) = app.get("/api/v1/products/reportRecords?id=9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_product_with_records_conflicts() {
    let app = TestApp::new().await;
    let product = app.create_product("PRD-1", None).await;
    app.create_product_record(id_of(&product)).await;

    let (status, body) = app
        .delete(&format!("/api/v1/products/{}", id_of(&product)))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Product is referenced by other records");
}

#[tokio::test]
async fn purchase_order_in_the_future_is_unprocessable() {
    let app = TestApp::new().await;
    let buyer = app.create_buyer(12345678, "Juan", "Perez").await;
    let product = app.create_product("PRD-1", None).await;
    let record = app.create_product_record(id_of(&product)).await;
    let tomorrow = (Utc::now() + Duration::days(1)).to_rfc3339();

    let (status, body) = app
        .post(
            "/api/v1/purchaseOrders",
            json!({
                "order_number": "PO-1",
                "order_date": tomorrow,
                "tracking_code": "TRK-1",
                "buyer_id": id_of(&buyer),
                "product_record_id": id_of(&record)
            }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "order_date cannot be in the future");

    let created = app
        .create(
            "/api/v1/purchaseOrders",
            json!({
                "order_number": "PO-1",
                "order_date": "2024-02-01",
                "tracking_code": "TRK-1",
                "buyer_id": id_of(&buyer),
                "product_record_id": id_of(&record)
            }),
        )
        .await;
    assert_eq!(created["order_date"], "2024-02-01T00:00:00");

    let (status, _) = app
        .patch(
            &format!("/api/v1/purchaseOrders/{}", id_of(&created)),
            json!({"order_date": tomorrow}),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn purchase_order_for_unknown_buyer_conflicts() {
    let app = TestApp::new().await;
    let product = app.create_product("PRD-1", None).await;
    let record = app.create_product_record(id_of(&product)).await;

    let (status, body) = app
        .post(
            "/api/v1/purchaseOrders",
            json!({
                "order_number": "PO-1",
                "order_date": "2024-02-01 10:00:00",
                "tracking_code": "TRK-1",
                "buyer_id": 3,
                "product_record_id": id_of(&record)
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Buyer or ProductRecord does not exist");
}

#[tokio::test]
async fn batch_number_is_unique() {
    let app = TestApp::new().await;
    let warehouse = app.create_warehouse("WH-01").await;
    let product = app.create_product("PRD-1", None).await;
    let section = app.create_section(101, id_of(&warehouse)).await;
    let batch = app
        .create_product_batch(5001, id_of(&product), id_of(&section))
        .await;
    assert_eq!(batch["due_date"], "2025-06-30");

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
                "manufacturing_hour": 8,
                "minimum_temperature": -25.0,
                "product_id": id_of(&product),
                "section_id": id_of(&section)
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "BatchNumber already in use");
}

#[tokio::test]
async fn referenced_rows_cannot_be_deleted_until_children_are_gone() {
    let app = TestApp::new().await;
    let buyer = app.create_buyer(12345678, "Juan", "Perez").await;
    let product = app.create_product("PRD-1", None).await;
    let record = app.create_product_record(id_of(&product)).await;
    let order = app
        .create(
            "/api/v1/purchaseOrders",
            json!({
                "order_number": "PO-1",
                "order_date": "2024-02-01",
                "tracking_code": "TRK-1",
                "buyer_id": id_of(&buyer),
                "product_record_id": id_of(&record)
            }),
        )
        .await;

    for (uri, message) in [
        ("/api/v1/buyers/1", "Buyer is referenced by other records"),
        ("/api/v1/productRecords/1", "ProductRecord is referenced by other records"),
        ("/api/v1/products/1", "Product is referenced by other records"),
    ] {
        let (status, body) = app.delete(uri).await;
        assert_eq!(status, StatusCode::CONFLICT, "{uri}");
        assert_eq!(body["message"], message);
    }

    let (status, _) = app
        .delete(&format!("/api/v1/purchaseOrders/{}", id_of(&order)))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    for uri in ["/api/v1/productRecords/1", "/api/v1/products/1", "/api/v1/buyers/1"] {
        let (status, _) = app.delete(uri).await;
        assert_eq!(status, StatusCode::NO_CONTENT, "{uri}");
    }
}

#[tokio::test]
async fn deleting_warehouse_with_sections_conflicts() {
    let app = TestApp::new().await;
    let warehouse = app.create_warehouse("WH-01").await;
    app.create_section(101, id_of(&warehouse)).await;

    let (status, body) = app
        .delete(&format!("/api/v1/warehouses/{}", id_of(&warehouse)))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Warehouse is referenced by other records");
}
