mod common;

use axum::http::StatusCode;
use regex::Regex;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn create_returns_the_record_under_client_field_names() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post(
            "/dispatches",
            json!({
                "dispatchDate": "2026-01-15",
                "dispatchLocation": "Katwa",
                "packagingType": "Jute 50kg",
                "weightKg": "500",
                "challanNo": "CH-881",
                "customerName": "Ram Traders"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    assert_eq!(body["dispatchDate"], "2026-01-15");
    assert_eq!(body["dispatchLocation"], "Katwa");
    assert_eq!(body["packagingType"], "Jute 50kg");
    assert_eq!(body["weightKg"], 500.0);
    assert_eq!(body["challanNo"], "CH-881");
    assert_eq!(body["customerName"], "Ram Traders");
    assert_eq!(body["dueDate"], "");

    let batch = body["batchNo"].as_str().expect("generated batch number");
    assert!(Regex::new(r"^DIS-\d{8}-\d{6}$").unwrap().is_match(batch));

    // Storage-internal names never leak to the client.
    assert!(body.get("date").is_none());
    assert!(body.get("location").is_none());
    assert!(body.get("packaging").is_none());
    assert!(body.get("weight").is_none());
    assert!(body.get("challan").is_none());
}

#[tokio::test]
async fn listing_is_newest_first_with_client_field_names() {
    let app = TestApp::spawn().await;

    app.post(
        "/dispatches",
        json!({
            "dispatchLocation": "Katwa",
            "challanNo": "CH-1",
            "weightKg": "250",
            "dispatchDate": "2026-01-10"
        }),
    )
    .await;
    app.post(
        "/dispatches",
        json!({
            "dispatchLocation": "Burdwan",
            "challanNo": "CH-2",
            "weightKg": 500,
            "dispatchDate": "2026-01-11"
        }),
    )
    .await;

    let (status, body) = app.get("/dispatches").await;
    assert_eq!(status, StatusCode::OK);
    let dispatches = body.as_array().expect("dispatch list");
    assert_eq!(dispatches.len(), 2);

    assert_eq!(dispatches[0]["dispatchLocation"], "Burdwan");
    assert_eq!(dispatches[1]["dispatchLocation"], "Katwa");
    for (dispatch, challan, weight, date) in [
        (&dispatches[0], "CH-2", 500.0, "2026-01-11"),
        (&dispatches[1], "CH-1", 250.0, "2026-01-10"),
    ] {
        assert_eq!(dispatch["challanNo"], challan);
        assert_eq!(dispatch["weightKg"], weight);
        assert_eq!(dispatch["dispatchDate"], date);
        // Storage-internal names never leak, listed records included.
        assert!(dispatch.get("location").is_none());
        assert!(dispatch.get("challan").is_none());
        assert!(dispatch.get("weight").is_none());
        assert!(dispatch.get("date").is_none());
    }
}

#[tokio::test]
async fn submitted_batch_no_is_kept() {
    let app = TestApp::spawn().await;

    let (_, body) = app
        .post("/dispatches", json!({"batchNo": "DIS-KEEP-1"}))
        .await;
    assert_eq!(body["batchNo"], "DIS-KEEP-1");
}

#[tokio::test]
async fn update_returns_the_full_updated_record() {
    let app = TestApp::spawn().await;

    let (_, created) = app
        .post(
            "/dispatches",
            json!({"dispatchLocation": "Katwa", "customerName": "Ram Traders"}),
        )
        .await;
    let id = created["id"].as_str().expect("record id");

    let (status, body) = app
        .put(
            &format!("/dispatches/{id}"),
            json!({"dispatchLocation": "Burdwan", "weightKg": 750}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], *id);
    assert_eq!(body["dispatchLocation"], "Burdwan");
    assert_eq!(body["weightKg"], 750.0);
    // Unsubmitted free text survives the update.
    assert_eq!(body["customerName"], "Ram Traders");
    assert_eq!(body["batchNo"], created["batchNo"]);
}

#[tokio::test]
async fn update_of_unknown_id_reports_not_found() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .put("/dispatches/999999", json!({"dispatchLocation": "Burdwan"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("error").is_some());
    assert_eq!(body["message"], "No dispatch found for given ID");
}

#[tokio::test]
async fn non_numeric_keys_are_rejected_before_the_store() {
    let app = TestApp::spawn().await;

    let (status, body) = app.delete("/dispatches/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());
    assert_eq!(body["message"], "'abc' is not a valid record id");

    let (status, _) = app
        .put("/dispatches/not-an-id", json!({"weightKg": 10}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_removes_the_dispatch() {
    let app = TestApp::spawn().await;

    let (_, created) = app.post("/dispatches", json!({})).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app.delete(&format!("/dispatches/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Dispatch deleted successfully");

    let (status, _) = app.delete(&format!("/dispatches/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
