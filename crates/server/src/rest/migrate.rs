//! One-off migration callback for cases still carrying the flat draft-CMO
//! list instead of per-hearing bundles.

use axum::Json;

use shared_types::{CallbackRequest, CallbackResponse};

use crate::cmo::bundle_index;

/// POST /callback/migrate-cmo-bundles/about-to-submit
///
/// Re-files every flat-list draft CMO under its hearing's bundle. Idempotent;
/// running it on an already-migrated case is a no-op.
#[utoipa::path(
    post,
    path = "/callback/migrate-cmo-bundles/about-to-submit",
    request_body = CallbackRequest,
    responses(
        (status = 200, description = "Migrated snapshot", body = CallbackResponse)
    ),
    tag = "migrate-cmo-bundles"
)]
pub async fn migrate_bundles(Json(request): Json<CallbackRequest>) -> Json<CallbackResponse> {
    let case_id = request.case_details.id;
    let mut data = request.case_details.data;

    let before = data.hearing_orders_bundles_drafts.len();
    bundle_index::migrate_flat_list_to_bundles(&mut data);
    tracing::info!(
        case_id,
        bundles_before = before,
        bundles_after = data.hearing_orders_bundles_drafts.len(),
        "Draft CMO flat list migrated to hearing bundles"
    );

    Json(CallbackResponse::with_data(data))
}
