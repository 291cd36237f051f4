//! Callback for the deprecated single-CMO progression event.
//!
//! Only unmigrated cases fire this; bundled cases go through the
//! approve-draft-orders callbacks instead.

use axum::Json;

use shared_types::{AppError, CallbackRequest, CallbackResponse, Element};

use crate::cmo::legacy::{self, LegacyProgression};

/// POST /callback/progress-cmo/about-to-submit
///
/// Applies the judge's recorded action to the case's single legacy CMO:
/// returned to the filer for rework, or served on the parties and appended
/// to the served list.
#[utoipa::path(
    post,
    path = "/callback/progress-cmo/about-to-submit",
    request_body = CallbackRequest,
    responses(
        (status = 200, description = "Progressed snapshot", body = CallbackResponse),
        (status = 400, description = "Case has no legacy CMO", body = AppError)
    ),
    tag = "progress-cmo"
)]
pub async fn about_to_submit(
    Json(request): Json<CallbackRequest>,
) -> Result<Json<CallbackResponse>, AppError> {
    let case_id = request.case_details.id;
    let mut data = request.case_details.data;

    let cmo = data
        .case_management_order
        .as_ref()
        .ok_or_else(|| AppError::bad_request("Case has no case management order to progress"))?;

    match legacy::progress(cmo) {
        LegacyProgression::Unchanged(_) => {
            tracing::debug!(case_id, "Legacy CMO unchanged — no judge action recorded");
        }
        LegacyProgression::ReturnedToFiler(returned) => {
            data.case_management_order = Some(returned);
        }
        LegacyProgression::SharedWithParties(served) => {
            data.served_case_management_orders.push(Element::new(served));
            data.case_management_order = None;
        }
    }

    Ok(Json(CallbackResponse::with_data(data)))
}
