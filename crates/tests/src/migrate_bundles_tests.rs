use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::*;

const MIGRATE: &str = "/callback/migrate-cmo-bundles/about-to-submit";

/// A flat-list draft CMO awaiting the judge, without a bundle.
fn unmigrated_case(cmo_id: Uuid, hearing_id: Uuid) -> Value {
    json!({
        "hearingDetails": [hearing(hearing_id, 2, "CASE_MANAGEMENT", Some(cmo_id))],
        "draftUploadedCmos": [order(cmo_id, "AGREED_CMO", "CMO")]
    })
}

#[tokio::test]
async fn flat_list_cmos_are_filed_under_their_hearing_bundle() {
    let app = test_app();

    let cmo_id = Uuid::new_v4();
    let hearing_id = Uuid::new_v4();
    let body = callback_body(4001, "CASE_MANAGEMENT", unmigrated_case(cmo_id, hearing_id));
    let (status, resp) = post_json(&app, MIGRATE, &body).await;

    assert_eq!(status, StatusCode::OK);
    let bundles = resp["data"]["hearingOrdersBundlesDrafts"].as_array().unwrap();
    assert_eq!(bundles.len(), 1);
    assert_eq!(bundles[0]["value"]["hearingId"], hearing_id.to_string());
    assert_eq!(
        bundles[0]["value"]["hearingName"],
        "Case management hearing, 2 September 2026"
    );
    assert_eq!(bundles[0]["value"]["orders"][0]["id"], cmo_id.to_string());
}

#[tokio::test]
async fn migration_is_idempotent() {
    let app = test_app();

    let cmo_id = Uuid::new_v4();
    let hearing_id = Uuid::new_v4();
    let body = callback_body(4002, "CASE_MANAGEMENT", unmigrated_case(cmo_id, hearing_id));
    let (_, first) = post_json(&app, MIGRATE, &body).await;

    let again = callback_body(4002, "CASE_MANAGEMENT", first["data"].clone());
    let (status, second) = post_json(&app, MIGRATE, &again).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        second["data"]["hearingOrdersBundlesDrafts"],
        first["data"]["hearingOrdersBundlesDrafts"]
    );
}

#[tokio::test]
async fn orphaned_drafts_are_skipped_not_fatal() {
    let app = test_app();

    // CMO whose hearing no longer exists.
    let data = json!({
        "hearingDetails": [],
        "draftUploadedCmos": [order(Uuid::new_v4(), "AGREED_CMO", "CMO")]
    });
    let body = callback_body(4003, "CASE_MANAGEMENT", data);
    let (status, resp) = post_json(&app, MIGRATE, &body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(resp["data"]["hearingOrdersBundlesDrafts"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn already_bundled_cases_pass_through_unchanged() {
    let app = test_app();

    let data = single_cmo_case(Uuid::new_v4(), "FINAL");
    let body = callback_body(4004, "CASE_MANAGEMENT", data.clone());
    let (status, resp) = post_json(&app, MIGRATE, &body).await;

    assert_eq!(status, StatusCode::OK);
    let bundles = resp["data"]["hearingOrdersBundlesDrafts"].as_array().unwrap();
    assert_eq!(bundles.len(), 1);
    assert_eq!(
        bundles[0]["value"]["orders"].as_array().unwrap().len(),
        1
    );
}
