use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use server::docmosis::DocumentRenderer;
use server::notify::Notifier;
use server::state::AppState;
use shared_types::{AppError, DocumentReference};

/// Renderer stub that marks the filename instead of calling out.
struct StampingRenderer;

#[async_trait]
impl DocumentRenderer for StampingRenderer {
    async fn seal_document(
        &self,
        document: &DocumentReference,
    ) -> Result<DocumentReference, AppError> {
        Ok(DocumentReference::new(
            format!("sealed-{}", document.document_filename),
            document.document_url.clone(),
            document.document_binary_url.clone(),
        ))
    }
}

/// Build a test router with the stub renderer and a no-op notifier.
pub fn test_app() -> Router {
    let state = AppState::new(Arc::new(StampingRenderer), Arc::new(Notifier::new()));
    server::rest::api_router().with_state(state)
}

/// POST JSON to a route.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

// ── Case snapshot fixtures ──────────────────────────────────────────

/// Wrap case data in the platform's callback envelope.
pub fn callback_body(case_id: i64, state: &str, data: Value) -> String {
    json!({
        "caseDetails": {
            "id": case_id,
            "state": state,
            "data": data
        }
    })
    .to_string()
}

pub fn document(filename: &str) -> Value {
    json!({
        "documentFilename": filename,
        "documentUrl": format!("http://dm-store/{filename}"),
        "documentBinaryUrl": format!("http://dm-store/{filename}/binary")
    })
}

/// An order element awaiting the judge.
pub fn order(id: Uuid, kind: &str, title: &str) -> Value {
    json!({
        "id": id,
        "value": {
            "type": kind,
            "status": "SEND_TO_JUDGE",
            "title": title,
            "order": document("order.pdf")
        }
    })
}

/// A hearing element, optionally linked to a draft CMO.
pub fn hearing(id: Uuid, day: u32, hearing_type: &str, cmo_id: Option<Uuid>) -> Value {
    let mut value = json!({
        "type": hearing_type,
        "startsAt": format!("2026-09-{day:02}T10:00:00Z")
    });
    if let Some(cmo_id) = cmo_id {
        value["caseManagementOrderId"] = json!(cmo_id);
    }
    json!({ "id": id, "value": value })
}

pub fn bundle(id: Uuid, hearing_id: Uuid, hearing_name: &str, orders: Vec<Value>) -> Value {
    json!({
        "id": id,
        "value": {
            "hearingId": hearing_id,
            "hearingName": hearing_name,
            "orders": orders
        }
    })
}

/// One CMO bundled alone for a hearing at T+2d, with a second hearing at
/// T+5d of the given type.
pub fn single_cmo_case(cmo_id: Uuid, next_hearing_type: &str) -> Value {
    let first_hearing = Uuid::new_v4();
    let cmo = order(cmo_id, "AGREED_CMO", "CMO");
    json!({
        "hearingDetails": [
            hearing(first_hearing, 2, "CASE_MANAGEMENT", Some(cmo_id)),
            hearing(Uuid::new_v4(), 5, next_hearing_type, None)
        ],
        "draftUploadedCmos": [cmo.clone()],
        "hearingOrdersBundlesDrafts": [bundle(
            Uuid::new_v4(),
            first_hearing,
            "Case management hearing, 2 September 2026",
            vec![cmo]
        )]
    })
}
