use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::common::*;

const ABOUT_TO_SUBMIT: &str = "/callback/approve-draft-orders/about-to-submit";
const SUBMITTED: &str = "/callback/approve-draft-orders/submitted";

#[tokio::test]
async fn sealing_a_cmo_before_the_final_hearing_progresses_the_case() {
    let app = test_app();

    let cmo_id = Uuid::new_v4();
    let mut data = single_cmo_case(cmo_id, "FINAL");
    data["reviewCmoDecision"] = json!({ "decision": "SEND_TO_ALL_PARTIES" });
    let body = callback_body(3001, "CASE_MANAGEMENT", data);
    let (status, resp) = post_json(&app, ABOUT_TO_SUBMIT, &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["state"], "FINAL_HEARING");

    let out = &resp["data"];
    let sealed = out["sealedCmos"].as_array().unwrap();
    assert_eq!(sealed.len(), 1);
    assert_eq!(sealed[0]["id"], cmo_id.to_string());
    assert_eq!(sealed[0]["value"]["status"], "APPROVED");
    assert_eq!(
        sealed[0]["value"]["order"]["documentFilename"],
        "sealed-order.pdf"
    );
    assert!(out["hearingDetails"][0]["value"]
        .get("caseManagementOrderId")
        .is_none());
    assert!(out.get("hearingOrdersBundlesDrafts").map_or(true, |b| b
        .as_array()
        .unwrap()
        .is_empty()));
    assert_eq!(out["reviewedCmo"]["id"], cmo_id.to_string());
}

#[tokio::test]
async fn sealing_a_cmo_before_an_ordinary_hearing_keeps_the_state() {
    let app = test_app();

    let cmo_id = Uuid::new_v4();
    let mut data = single_cmo_case(cmo_id, "CASE_MANAGEMENT");
    data["reviewCmoDecision"] = json!({ "decision": "SEND_TO_ALL_PARTIES" });
    let body = callback_body(3002, "CASE_MANAGEMENT", data);
    let (status, resp) = post_json(&app, ABOUT_TO_SUBMIT, &body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(resp.get("state").is_none());
    assert_eq!(resp["data"]["sealedCmos"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn rejecting_a_cmo_seals_nothing_and_keeps_the_hearing_link() {
    let app = test_app();

    let cmo_id = Uuid::new_v4();
    let mut data = single_cmo_case(cmo_id, "FINAL");
    data["reviewCmoDecision"] = json!({
        "decision": "JUDGE_REQUESTED_CHANGES",
        "changesRequestedByJudge": "Amend paragraph 4"
    });
    let body = callback_body(3003, "CASE_MANAGEMENT", data);
    let (status, resp) = post_json(&app, ABOUT_TO_SUBMIT, &body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(resp.get("state").is_none());

    let out = &resp["data"];
    assert!(out.get("sealedCmos").map_or(true, |s| s.as_array().unwrap().is_empty()));
    assert_eq!(
        out["hearingDetails"][0]["value"]["caseManagementOrderId"],
        cmo_id.to_string()
    );
    assert_eq!(
        out["reviewedCmo"]["value"]["requestedChanges"],
        "Amend paragraph 4"
    );
    assert_eq!(out["reviewedCmo"]["value"]["status"], "DRAFT");
}

#[tokio::test]
async fn mixed_bundle_resolves_orders_independently() {
    let app = test_app();

    let cmo_id = Uuid::new_v4();
    let second_id = Uuid::new_v4();
    let third_id = Uuid::new_v4();
    let hearing_id = Uuid::new_v4();

    let cmo = order(cmo_id, "AGREED_CMO", "CMO");
    let data = json!({
        "hearingDetails": [hearing(hearing_id, 2, "CASE_MANAGEMENT", Some(cmo_id))],
        "draftUploadedCmos": [cmo.clone()],
        "hearingOrdersBundlesDrafts": [bundle(
            Uuid::new_v4(),
            hearing_id,
            "Case management hearing, 2 September 2026",
            vec![
                cmo,
                order(second_id, "C21", "Contact order"),
                order(third_id, "C21", "Supervision order")
            ]
        )],
        "reviewCmoDecision": { "decision": "SEND_TO_ALL_PARTIES" },
        "reviewDecisions": [
            { "decision": "JUDGE_AMENDS_DRAFT" },
            { "decision": "JUDGE_REQUESTED_CHANGES", "changesRequestedByJudge": "add contact details" }
        ]
    });
    let body = callback_body(3004, "CASE_MANAGEMENT", data);
    let (status, resp) = post_json(&app, ABOUT_TO_SUBMIT, &body).await;

    assert_eq!(status, StatusCode::OK);
    let out = &resp["data"];

    assert_eq!(out["sealedCmos"].as_array().unwrap().len(), 1);
    assert_eq!(out["orderCollection"].as_array().unwrap().len(), 1);
    assert_eq!(out["orderCollection"][0]["value"]["title"], "Contact order");

    let outbound = out["ordersToBeSent"].as_array().unwrap();
    assert_eq!(outbound.len(), 2);
    assert_eq!(outbound[0]["id"], second_id.to_string());
    assert_eq!(outbound[0]["value"]["status"], "APPROVED");
    assert_eq!(outbound[1]["id"], third_id.to_string());
    assert_eq!(
        outbound[1]["value"]["requestedChanges"],
        "add contact details"
    );

    assert!(out.get("hearingOrdersBundlesDrafts").map_or(true, |b| b
        .as_array()
        .unwrap()
        .is_empty()));
}

#[tokio::test]
async fn violations_come_back_without_mutation() {
    let app = test_app();

    let cmo_id = Uuid::new_v4();
    let mut data = single_cmo_case(cmo_id, "FINAL");
    data["reviewCmoDecision"] = json!({ "decision": "JUDGE_REQUESTED_CHANGES" });
    let body = callback_body(3005, "CASE_MANAGEMENT", data);
    let (status, resp) = post_json(&app, ABOUT_TO_SUBMIT, &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        resp["errors"],
        json!(["Add what the judge changed on the CMO"])
    );
    // Bundle untouched.
    assert_eq!(
        resp["data"]["hearingOrdersBundlesDrafts"]
            .as_array()
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn nothing_to_review_is_a_terminal_non_error() {
    let app = test_app();

    let body = callback_body(3006, "CASE_MANAGEMENT", json!({}));
    let (status, resp) = post_json(&app, ABOUT_TO_SUBMIT, &body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(resp.get("errors").is_none());
    assert!(resp.get("state").is_none());
}

#[tokio::test]
async fn decision_fields_are_cleared_after_resolution() {
    let app = test_app();

    let cmo_id = Uuid::new_v4();
    let mut data = single_cmo_case(cmo_id, "FINAL");
    data["reviewCmoDecision"] = json!({ "decision": "SEND_TO_ALL_PARTIES" });
    let bundle_id = data["hearingOrdersBundlesDrafts"][0]["id"].clone();
    data["cmoToReview"] = bundle_id;
    let body = callback_body(3007, "CASE_MANAGEMENT", data);
    let (status, resp) = post_json(&app, ABOUT_TO_SUBMIT, &body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(resp["data"].get("reviewCmoDecision").is_none());
    assert!(resp["data"].get("cmoToReview").is_none());
    assert!(resp["data"]
        .get("reviewDecisions")
        .map_or(true, |d| d.as_array().unwrap().is_empty()));
}

#[tokio::test]
async fn submitted_accepts_the_staged_artifacts() {
    let app = test_app();

    let cmo_id = Uuid::new_v4();
    let data = json!({
        "reviewedCmo": {
            "id": cmo_id,
            "value": {
                "type": "AGREED_CMO",
                "status": "APPROVED",
                "title": "CMO",
                "order": document("sealed-order.pdf")
            }
        },
        "ordersToBeSent": [order(Uuid::new_v4(), "C21", "Contact order")]
    });
    let body = callback_body(3008, "CASE_MANAGEMENT", data);
    let (status, _) = post_json(&app, SUBMITTED, &body).await;

    assert_eq!(status, StatusCode::OK);
}
