use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::*;

const PROGRESS: &str = "/callback/progress-cmo/about-to-submit";

fn legacy_cmo(action: Option<Value>) -> Value {
    let mut cmo = json!({
        "status": "SEND_TO_JUDGE",
        "orderDoc": document("cmo.pdf"),
        "hearingDate": "2 September 2026"
    });
    if let Some(action) = action {
        cmo["action"] = action;
    }
    cmo
}

#[tokio::test]
async fn send_to_all_parties_moves_the_cmo_to_the_served_list() {
    let app = test_app();

    let data = json!({
        "caseManagementOrder": legacy_cmo(Some(json!({ "type": "SEND_TO_ALL_PARTIES" })))
    });
    let body = callback_body(5001, "CASE_MANAGEMENT", data);
    let (status, resp) = post_json(&app, PROGRESS, &body).await;

    assert_eq!(status, StatusCode::OK);
    let out = &resp["data"];
    assert!(out.get("caseManagementOrder").is_none());
    let served = out["servedCaseManagementOrders"].as_array().unwrap();
    assert_eq!(served.len(), 1);
    assert_eq!(served[0]["value"]["status"], "PARTIES_REVIEW");
    assert!(served[0]["value"].get("action").is_none());
}

#[tokio::test]
async fn requested_change_returns_the_cmo_to_the_filer() {
    let app = test_app();

    let data = json!({
        "caseManagementOrder": legacy_cmo(Some(json!({
            "type": "JUDGE_REQUESTED_CHANGE",
            "changeRequestedByJudge": "Add recitals"
        })))
    });
    let body = callback_body(5002, "CASE_MANAGEMENT", data);
    let (status, resp) = post_json(&app, PROGRESS, &body).await;

    assert_eq!(status, StatusCode::OK);
    let cmo = &resp["data"]["caseManagementOrder"];
    assert_eq!(cmo["status"], "SELF_REVIEW");
    assert_eq!(cmo["action"]["changeRequestedByJudge"], "Add recitals");
    assert!(resp["data"]
        .get("servedCaseManagementOrders")
        .is_none());
}

#[tokio::test]
async fn no_recorded_action_passes_the_cmo_through() {
    let app = test_app();

    let data = json!({ "caseManagementOrder": legacy_cmo(None) });
    let body = callback_body(5003, "CASE_MANAGEMENT", data);
    let (status, resp) = post_json(&app, PROGRESS, &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["data"]["caseManagementOrder"]["status"], "SEND_TO_JUDGE");
}

#[tokio::test]
async fn progressing_without_a_legacy_cmo_is_rejected() {
    let app = test_app();

    let body = callback_body(5004, "CASE_MANAGEMENT", json!({}));
    let (status, resp) = post_json(&app, PROGRESS, &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["message"]
        .as_str()
        .unwrap()
        .contains("no case management order"));
}
