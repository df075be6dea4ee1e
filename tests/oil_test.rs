mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn oil_orders_answer_with_a_message_and_keep_gst_fields_apart() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post(
            "/oilorders",
            json!({
                "customerName": "Shree Traders",
                "oilVariant": "Mustard",
                "gst": "5",
                "gstAmount": "12.5",
                "amount": 262.5
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Oil order added successfully");

    let (_, body) = app.get("/oilorders").await;
    let order = &body.as_array().unwrap()[0];
    assert_eq!(order["gst"], 5.0);
    assert_eq!(order["gstAmount"], 12.5);
    assert_eq!(order["oilVariant"], "Mustard");
    // The batch number is lowercase for this resource and never generated.
    assert_eq!(order["batchno"], "");
    assert!(order.get("batchNo").is_none());
}

#[tokio::test]
async fn oil_order_update_and_missing_id() {
    let app = TestApp::spawn().await;

    app.post("/oilorders", json!({"customerName": "Shree Traders"}))
        .await;
    let (_, body) = app.get("/oilorders").await;
    let id = body.as_array().unwrap()[0]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .put(&format!("/oilorders/{id}"), json!({"status": "Delivered"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Oil order updated successfully");

    let (status, body) = app
        .put("/oilorders/777777", json!({"status": "Delivered"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No oil order found for given ID");
}

#[tokio::test]
async fn oil_dispatch_create_returns_the_record_with_numeric_codes() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post(
            "/oildispatches",
            json!({
                "batchNo": "OIL-B-1",
                "hsnCode": "1512",
                "barCode": 890123,
                "skuCode": "OIL-5L",
                "oilVariant": "Sunflower",
                "weight": "15"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    assert_eq!(body["batchNo"], "OIL-B-1");
    assert_eq!(body["hsnCode"], 1512.0);
    assert_eq!(body["barCode"], 890123.0);
    assert_eq!(body["skuCode"], "OIL-5L");
    assert_eq!(body["weight"], 15.0);
    assert_eq!(body["gstAmount"], 0.0);
}

#[tokio::test]
async fn oil_dispatch_listing_is_newest_first() {
    let app = TestApp::spawn().await;

    app.post(
        "/oildispatches",
        json!({"batchNo": "OIL-B-1", "oilVariant": "Mustard", "hsnCode": "1514"}),
    )
    .await;
    app.post(
        "/oildispatches",
        json!({"batchNo": "OIL-B-2", "oilVariant": "Sunflower", "hsnCode": "1512"}),
    )
    .await;

    let (status, body) = app.get("/oildispatches").await;
    assert_eq!(status, StatusCode::OK);
    let dispatches = body.as_array().expect("oil dispatch list");
    assert_eq!(dispatches.len(), 2);

    assert_eq!(dispatches[0]["batchNo"], "OIL-B-2");
    assert_eq!(dispatches[0]["oilVariant"], "Sunflower");
    assert_eq!(dispatches[0]["hsnCode"], 1512.0);
    assert_eq!(dispatches[1]["batchNo"], "OIL-B-1");
    assert_eq!(dispatches[1]["hsnCode"], 1514.0);
}

#[tokio::test]
async fn oil_dispatch_update_echoes_the_stored_record() {
    let app = TestApp::spawn().await;

    let (_, created) = app
        .post("/oildispatches", json!({"loadingMan": "Karim"}))
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app
        .put(
            &format!("/oildispatches/{id}"),
            json!({"location": "Burdwan", "advance": "2000"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "Burdwan");
    assert_eq!(body["advance"], 2000.0);
    assert_eq!(body["loadingMan"], "Karim");
}

#[tokio::test]
async fn oil_dispatch_key_validation_and_delete() {
    let app = TestApp::spawn().await;

    let (status, body) = app.delete("/oildispatches/xyz").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());

    let (_, created) = app.post("/oildispatches", json!({})).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app.delete(&format!("/oildispatches/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Oil dispatch deleted successfully");

    let (status, body) = app.delete(&format!("/oildispatches/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No oil dispatch found for given ID");
}
