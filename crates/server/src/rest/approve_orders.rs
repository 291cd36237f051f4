//! Callbacks for the approve-draft-orders review event.

use axum::{extract::State, http::StatusCode, Json};

use shared_types::{
    AppError, CallbackRequest, CallbackResponse, DraftOrdersReviewData, ReviewPageResponse,
};

use crate::cmo::orchestrator::{self, ReviewResult};
use crate::state::AppState;

/// POST /callback/approve-draft-orders/about-to-start
///
/// Decides which review page the platform renders: nothing pending, a single
/// bundle auto-selected with its display data, or a selector over several
/// bundles.
#[utoipa::path(
    post,
    path = "/callback/approve-draft-orders/about-to-start",
    request_body = CallbackRequest,
    responses(
        (status = 200, description = "Review page controls", body = ReviewPageResponse)
    ),
    tag = "approve-draft-orders"
)]
pub async fn about_to_start(Json(request): Json<CallbackRequest>) -> Json<ReviewPageResponse> {
    let page = orchestrator::page_controls(&request.case_details.data);
    tracing::debug!(
        case_id = request.case_details.id,
        pending = ?page.num_draft_cmos,
        "Review page prepared"
    );
    Json(page)
}

/// POST /callback/approve-draft-orders/populate-selected-bundle
///
/// Mid-event callback fired once the reviewer has picked a bundle from the
/// selector; returns the display data for that bundle.
#[utoipa::path(
    post,
    path = "/callback/approve-draft-orders/populate-selected-bundle",
    request_body = CallbackRequest,
    responses(
        (status = 200, description = "Selected bundle display data", body = DraftOrdersReviewData),
        (status = 400, description = "No bundle selected", body = AppError),
        (status = 404, description = "Selected bundle not found", body = AppError)
    ),
    tag = "approve-draft-orders"
)]
pub async fn populate_selected_bundle(
    Json(request): Json<CallbackRequest>,
) -> Result<Json<DraftOrdersReviewData>, AppError> {
    let data = orchestrator::selected_bundle_review_data(&request.case_details.data)?;
    Ok(Json(data))
}

/// POST /callback/approve-draft-orders/validate
///
/// Mid-event decision validation; violations come back in `errors` and the
/// platform re-prompts without persisting.
#[utoipa::path(
    post,
    path = "/callback/approve-draft-orders/validate",
    request_body = CallbackRequest,
    responses(
        (status = 200, description = "Validation outcome", body = CallbackResponse),
        (status = 400, description = "No bundle selected", body = AppError)
    ),
    tag = "approve-draft-orders"
)]
pub async fn validate(
    Json(request): Json<CallbackRequest>,
) -> Result<Json<CallbackResponse>, AppError> {
    let data = request.case_details.data;
    let errors = orchestrator::validate_review(&data)?;
    Ok(Json(CallbackResponse::with_errors(data, errors)))
}

/// POST /callback/approve-draft-orders/about-to-submit
///
/// Runs the full resolution over the selected bundle and hands the mutated
/// snapshot back, with the outbound artifacts staged on it for the
/// post-submit callback.
#[utoipa::path(
    post,
    path = "/callback/approve-draft-orders/about-to-submit",
    request_body = CallbackRequest,
    responses(
        (status = 200, description = "Resolved snapshot", body = CallbackResponse),
        (status = 400, description = "No bundle selected", body = AppError),
        (status = 502, description = "Rendering collaborator failed", body = AppError)
    ),
    tag = "approve-draft-orders"
)]
pub async fn about_to_submit(
    State(state): State<AppState>,
    Json(request): Json<CallbackRequest>,
) -> Result<Json<CallbackResponse>, AppError> {
    let case_id = request.case_details.id;
    let mut data = request.case_details.data;

    match orchestrator::review(&mut data, state.renderer.as_ref()).await? {
        ReviewResult::NothingToReview => {
            tracing::info!(case_id, "No draft orders ready for approval");
            Ok(Json(CallbackResponse::with_data(data)))
        }
        ReviewResult::Violations(errors) => Ok(Json(CallbackResponse::with_errors(data, errors))),
        ReviewResult::Resolved(resolved) => {
            data.reviewed_cmo = resolved.cmo;
            data.orders_to_be_sent = resolved.orders_to_be_sent;
            let mut response = CallbackResponse::with_data(data);
            response.state = resolved.new_state;
            Ok(Json(response))
        }
    }
}

/// POST /callback/approve-draft-orders/submitted
///
/// Fire-and-forget dispatch of the staged artifacts. The review itself is
/// already committed; a notification failure is logged, never surfaced.
#[utoipa::path(
    post,
    path = "/callback/approve-draft-orders/submitted",
    request_body = CallbackRequest,
    responses(
        (status = 200, description = "Notification dispatch scheduled")
    ),
    tag = "approve-draft-orders"
)]
pub async fn submitted(
    State(state): State<AppState>,
    Json(request): Json<CallbackRequest>,
) -> StatusCode {
    let case_id = request.case_details.id;
    let data = request.case_details.data;

    let cmo = data.reviewed_cmo.into_iter().collect::<Vec<_>>();
    let orders = data.orders_to_be_sent;
    let notifier = state.notifier.clone();

    tokio::spawn(async move {
        notifier.dispatch_issued_orders(case_id, &cmo).await;
        notifier.dispatch_issued_orders(case_id, &orders).await;
    });

    StatusCode::OK
}
