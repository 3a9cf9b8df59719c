mod common;

use axum::http::{Method, StatusCode};
use common::{id_of, TestApp};
use rstest::rstest;
use serde_json::json;

#[tokio::test]
async fn create_buyer_returns_stored_entity() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/buyers",
            json!({"card_number_id": 12345678, "first_name": "Juan", "last_name": "Perez"}),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"data": {"id": 1, "card_number_id": 12345678, "first_name": "Juan", "last_name": "Perez"}})
    );

    let (status, fetched) = app.get("/api/v1/buyers/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn duplicate_card_number_id_conflicts() {
    let app = TestApp::new().await;
    let payload = json!({"card_number_id": 12345678, "first_name": "Juan", "last_name": "Perez"});

    let (status, _) = app.post("/api/v1/buyers", payload.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.post("/api/v1/buyers", payload).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body,
        json!({"status": "Conflict", "message": "CardNumberId already in use"})
    );
}

#[tokio::test]
async fn unknown_field_is_rejected_before_storage() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/buyers",
            json!({
                "card_number_id": 12345678,
                "first_name": "Juan",
                "last_name": "Perez",
                "unknown_field": "x"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid JSON body");

    let (_, list) = app.get("/api/v1/buyers").await;
    assert_eq!(list, json!({"data": []}));
}

#[tokio::test]
async fn client_supplied_id_is_an_unknown_field() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/buyers",
            json!({"id": 9, "card_number_id": 12345678, "first_name": "Juan", "last_name": "Perez"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid JSON body");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request_raw(Method::POST, "/api/v1/buyers", "{\"card_number_id\": ")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"status": "Bad Request", "message": "Invalid JSON body"}));
}

#[tokio::test]
async fn patch_changes_only_given_fields() {
    let app = TestApp::new().await;
    app.create_buyer(12345678, "Juan", "Perez").await;

    let (status, body) = app
        .patch("/api/v1/buyers/1", json!({"last_name": "Garcia"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({"id": 1, "card_number_id": 12345678, "first_name": "Juan", "last_name": "Garcia"})
    );

    let (_, fetched) = app.get("/api/v1/buyers/1").await;
    assert_eq!(fetched["data"]["last_name"], "Garcia");
    assert_eq!(fetched["data"]["first_name"], "Juan");
}

#[tokio::test]
async fn patch_to_another_buyers_card_conflicts() {
    let app = TestApp::new().await;
    app.create_buyer(12345678, "Juan", "Perez").await;
    app.create_buyer(87654321, "Ana", "Gomez").await;

    let (status, body) = app
        .patch("/api/v1/buyers/2", json!({"card_number_id": 12345678}))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "CardNumberId already in use");

    // Re-sending the buyer's own card is not a conflict.
    let (status, _) = app
        .patch("/api/v1/buyers/2", json!({"card_number_id": 87654321}))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn patch_of_missing_buyer_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app
        .patch("/api/v1/buyers/42", json!({"last_name": "Garcia"}))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"status": "Not Found", "message": "Buyer not Found"}));
}

#[rstest]
#[case(1234567)]
#[case(100000000)]
#[case(10000000000)]
#[case(-12345678)]
#[tokio::test]
async fn card_number_outside_eight_digits_is_unprocessable(#[case] card: i64) {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/buyers",
            json!({"card_number_id": card, "first_name": "Juan", "last_name": "Perez"}),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "card_number_id must have 8 digits");
}

#[tokio::test]
async fn oversized_card_number_patch_is_unprocessable() {
    let app = TestApp::new().await;
    let buyer = app.create_buyer(12345678, "Juan", "Perez").await;

    let (status, body) = app
        .patch(
            &format!("/api/v1/buyers/{}", id_of(&buyer)),
            json!({"card_number_id": 10000000000_i64}),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "card_number_id must have 8 digits");

    let (_, stored) = app.get(&format!("/api/v1/buyers/{}", id_of(&buyer))).await;
    assert_eq!(stored["data"]["card_number_id"], 12345678);
}

#[tokio::test]
async fn names_with_digits_are_unprocessable() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/buyers",
            json!({"card_number_id": 12345678, "first_name": "Juan2", "last_name": "Perez"}),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "names must contain only letters");
}

#[tokio::test]
async fn missing_attribute_is_unprocessable() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/api/v1/buyers", json!({"card_number_id": 12345678, "first_name": "Juan"}))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "last_name is required");
}

#[rstest]
#[case("/api/v1/buyers/0")]
#[case("/api/v1/buyers/-1")]
#[case("/api/v1/buyers/abc")]
#[tokio::test]
async fn invalid_ids_are_bad_requests(#[case] uri: &str) {
    let app = TestApp::new().await;

    for method in [Method::GET, Method::DELETE] {
        let (status, body) = app.call(method, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"status": "Bad Request", "message": "Invalid Id"}));
    }

    let (status, _) = app.patch(uri, json!({"last_name": "Garcia"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = TestApp::new().await;
    let buyer = app.create_buyer(12345678, "Juan", "Perez").await;
    let uri = format!("/api/v1/buyers/{}", id_of(&buyer));

    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, body) = app.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Buyer not Found");

    let (status, _) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_is_sorted_by_id_without_duplicates() {
    let app = TestApp::new().await;
    app.create_buyer(33333333, "Carla", "Rios").await;
    app.create_buyer(11111111, "Ana", "Gomez").await;
    app.create_buyer(22222222, "Bruno", "Silva").await;
    app.delete("/api/v1/buyers/2").await;

    let (status, body) = app.get("/api/v1/buyers").await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(id_of)
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn deleting_buyer_with_purchase_orders_conflicts() {
    let app = TestApp::new().await;
    let buyer = app.create_buyer(12345678, "Juan", "Perez").await;
    let product = app.create_product("PRD-1", None).await;
    let record = app.create_product_record(id_of(&product)).await;
    app.create(
        "/api/v1/purchaseOrders",
        json!({
            "order_number": "PO-1",
            "order_date": "2024-02-01 10:00:00",
            "tracking_code": "TRK-1",
            "buyer_id": id_of(&buyer),
            "product_record_id": id_of(&record)
        }),
    )
    .await;

    let (status, body) = app.delete("/api/v1/buyers/1").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Buyer is referenced by other records");
}

#[tokio::test]
async fn purchase_orders_report_counts_per_buyer() {
    let app = TestApp::new().await;
    let juan = app.create_buyer(12345678, "Juan", "Perez").await;
    app.create_buyer(87654321, "Ana", "Gomez").await;
    let product = app.create_product("PRD-1", None).await;
    let record = app.create_product_record(id_of(&product)).await;

    for number in ["PO-1", "PO-2"] {
        app.create(
            "/api/v1/purchaseOrders",
            json!({
                "order_number": number,
                "order_date": "2024-02-01T10:00:00Z",
                "tracking_code": "TRK",
                "buyer_id": id_of(&juan),
                "product_record_id": id_of(&record)
            }),
        )
        .await;
    }

    let (status, body) = app.get("/api/v1/buyers/reportPurchaseOrders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!([
            {"id": 1, "card_number_id": 12345678, "first_name": "Juan", "last_name": "Perez", "purchase_orders_count": 2},
            {"id": 2, "card_number_id": 87654321, "first_name": "Ana", "last_name": "Gomez", "purchase_orders_count": 0}
        ])
    );

    let (status, body) = app.get("/api/v1/buyers/reportPurchaseOrders?id=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["purchase_orders_count"], 0);

    let (status, _) = app.get("/api/v1/buyers/reportPurchaseOrders?id=99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.get("/api/v1/buyers/reportPurchaseOrders?id=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid Id");
}
