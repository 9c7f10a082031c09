//! Tests for POST /iso/pacs008

use crate::common::*;
use iso_bus::config::StoragePolicy;
use serde_json::Value;

#[tokio::test]
async fn test_pacs008_end_to_end() {
    let app = test_app();

    let response = app
        .router
        .oneshot(post("/iso/pacs008", TRANSFER_JSON))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );

    let body = body_bytes(response).await;
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["inst_name"], "Bank X");
    assert_eq!(json["inst_bic"], "BANKXX00");
    assert_eq!(json["inst_lei"], "LEI123");
    assert_eq!(json["tx_reference"], "REF1");
    assert_eq!(json["currency"], "USD");
    assert_eq!(json["amount"], "100.00");
    assert_eq!(json["debtor_name"], "Alice");
    assert_eq!(json["creditor_name"], "Bob");
    assert_eq!(json["debtor_account"], "A1");
    assert_eq!(json["creditor_account"], "B2");
    assert!(json["message_id"].as_str().unwrap().starts_with("MSG-"));
    assert!(json["creation_dt"].as_str().unwrap().ends_with('Z'));

    // Exactly one record, same bytes as the response
    let path = assert_single_record(app.data_dir.path(), "pacs008_");
    assert_eq!(std::fs::read(path).unwrap(), body);
    assert!(files_with_prefix(app.data_dir.path(), "holdcb_").is_empty());
}

#[tokio::test]
async fn test_pacs008_response_is_indented() {
    let app = test_app();

    let response = app
        .router
        .oneshot(post("/iso/pacs008", TRANSFER_JSON))
        .await
        .unwrap();

    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.starts_with("{\n  \"message_id\""), "{body}");
}

#[tokio::test]
async fn test_pacs008_without_content_type() {
    let app = test_app();

    let response = app
        .router
        .oneshot(
            Request::post("/iso/pacs008")
                .body(Body::from(TRANSFER_JSON))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_single_record(app.data_dir.path(), "pacs008_");
}

#[tokio::test]
async fn test_pacs008_missing_fields_become_empty() {
    let app = test_app();

    let response = app
        .router
        .oneshot(post("/iso/pacs008", r#"{"amount":"abc","currency":"??"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["amount"], "abc");
    assert_eq!(json["currency"], "??");
    assert_eq!(json["tx_reference"], "");
    assert_eq!(json["debtor_account"], "");
    assert_eq!(json["inst_bic"], "BANKXX00");
}

#[tokio::test]
async fn test_pacs008_malformed_json() {
    let app = test_app();

    let response = app
        .router
        .oneshot(post("/iso/pacs008", r#"{"tx_hash": "#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(json["error"].as_str().unwrap().starts_with("bad json: "));
    assert_eq!(json["code"], "INVALID_JSON");
    assert_no_records(app.data_dir.path());
}

#[tokio::test]
async fn test_pacs008_empty_body() {
    let app = test_app();

    let response = app.router.oneshot(post("/iso/pacs008", "")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_no_records(app.data_dir.path());
}

#[tokio::test]
async fn test_pacs008_rejects_non_post() {
    for method in ["GET", "PUT", "DELETE", "PATCH"] {
        let app = test_app();

        let response = app
            .router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/iso/pacs008")
                    .body(Body::from(TRANSFER_JSON))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_no_records(app.data_dir.path());
    }
}

#[tokio::test]
async fn test_pacs008_message_ids_are_fresh() {
    let app = test_app();

    let mut ids = Vec::new();
    for _ in 0..2 {
        let response = app
            .router
            .clone()
            .oneshot(post("/iso/pacs008", TRANSFER_JSON))
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        ids.push(json["message_id"].as_str().unwrap().to_string());
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    assert_ne!(ids[0], ids[1]);
    assert_eq!(files_with_prefix(app.data_dir.path(), "pacs008_").len(), 2);
}

#[tokio::test]
async fn test_pacs008_store_failure_lenient() {
    let app = test_app();
    std::fs::remove_dir_all(app.data_dir.path()).unwrap();

    let response = app
        .router
        .oneshot(post("/iso/pacs008", TRANSFER_JSON))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_pacs008_store_failure_strict() {
    let app = test_app_with(
        bank_x(),
        StoragePolicy {
            strict: true,
            fsync: false,
        },
    );
    std::fs::remove_dir_all(app.data_dir.path()).unwrap();

    let response = app
        .router
        .oneshot(post("/iso/pacs008", TRANSFER_JSON))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["code"], "STORAGE_ERROR");
}

#[tokio::test]
async fn test_pacs008_null_fields_become_empty() {
    let app = test_app();

    let body = r#"{"tx_hash":"0xabc","from_account":"A1","to_account":null,"currency":"USD","amount":"100.00","reference":null,"occurred_at":null,"beneficiary_name":"Bob","originator_name":null}"#;
    let response = app
        .router
        .oneshot(post("/iso/pacs008", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["tx_reference"], "");
    assert_eq!(json["creditor_account"], "");
    assert_eq!(json["debtor_name"], "");
    assert_eq!(json["debtor_account"], "A1");
    assert_eq!(json["creditor_name"], "Bob");

    assert_single_record(app.data_dir.path(), "pacs008_");
}
