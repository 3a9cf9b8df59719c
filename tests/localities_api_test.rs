mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn sellers_report_by_locality() {
    let app = TestApp::new().await;
    app.create_locality("L1", "Lujan").await;
    app.create_locality("L2", "Palermo").await;
    app.create_locality("L3", "Belgrano").await;
    for cid in [1, 2, 3] {
        app.create_seller(cid, "L1").await;
    }
    app.create_seller(4, "L3").await;

    let (status, body) = app.get("/api/v1/localities/reportSellers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!([
            {"locality_id": "L1", "locality_name": "Lujan", "sellers_count": 3},
            {"locality_id": "L2", "locality_name": "Palermo", "sellers_count": 0},
            {"locality_id": "L3", "locality_name": "Belgrano", "sellers_count": 1}
        ])
    );

    let (status, body) = app.get("/api/v1/localities/reportSellers?id=L2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({"locality_id": "L2", "locality_name": "Palermo", "sellers_count": 0})
    );

    let (status, body) = app.get("/api/v1/localities/reportSellers?id=NOPE").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Locality not Found");
}

#[tokio::test]
async fn carries_report_by_locality() {
    let app = TestApp::new().await;
    app.create_locality("L1", "Lujan").await;
    app.create_locality("L2", "Palermo").await;
    app.create(
        "/api/v1/carries",
        json!({
            "cid": "CAR-01",
            "company_name": "Transportes Lujan",
            "address": "Av. Constitucion 800",
            "telephone": "2323401010",
            "locality_id": "L2"
        }),
    )
    .await;

    let (status, body) = app.get("/api/v1/localities/reportCarries").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!([
            {"locality_id": "L1", "locality_name": "Lujan", "carries_count": 0},
            {"locality_id": "L2", "locality_name": "Palermo", "carries_count": 1}
        ])
    );

    let (status, body) = app.get("/api/v1/localities/reportCarries?id=L2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["carries_count"], 1);
}

#[tokio::test]
async fn report_on_empty_store_is_an_empty_list() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/localities/reportSellers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": []}));
}

#[tokio::test]
async fn locality_ids_are_natural_keys() {
    let app = TestApp::new().await;
    let created = app.create_locality("1414", "Palermo").await;
    assert_eq!(created["id"], "1414");

    let (status, body) = app
        .post(
            "/api/v1/localities",
            json!({
                "id": "1414",
                "locality_name": "Otra",
                "province_name": "Buenos Aires",
                "country_name": "Argentina"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "LocalityID already in use");

    let (status, body) = app
        .patch("/api/v1/localities/1414", json!({"locality_name": "Palermo Soho"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["locality_name"], "Palermo Soho");
    assert_eq!(body["data"]["province_name"], "Buenos Aires");

    let (status, _) = app.get("/api/v1/localities/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_locality_with_sellers_conflicts() {
    let app = TestApp::new().await;
    app.create_locality("L1", "Lujan").await;
    app.create_seller(1, "L1").await;

    let (status, body) = app.delete("/api/v1/localities/L1").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Locality is referenced by other records");
}

#[tokio::test]
async fn seller_requires_every_attribute() {
    let app = TestApp::new().await;
    app.create_locality("L1", "Lujan").await;

    let (status, body) = app
        .post(
            "/api/v1/sellers",
            json!({"cid": 1, "company_name": "Acme", "address": "Calle 1", "locality_id": "L1"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "telephone is required");
}

#[tokio::test]
async fn seller_in_unknown_locality_conflicts() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/sellers",
            json!({
                "cid": 1,
                "company_name": "Acme",
                "address": "Calle 1",
                "telephone": "1100000000",
                "locality_id": "NOPE"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Locality does not exist");
}

#[tokio::test]
async fn seller_cid_is_unique() {
    let app = TestApp::new().await;
    app.create_locality("L1", "Lujan").await;
    app.create_seller(7, "L1").await;

    let (status, body) = app
        .post(
            "/api/v1/sellers",
            json!({
                "cid": 7,
                "company_name": "Other",
                "address": "Calle 2",
                "telephone": "1100000001",
                "locality_id": "L1"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "CID already in use");
}
