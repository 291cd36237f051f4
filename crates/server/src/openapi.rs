use axum::Router;
use shared_types::{
    AppError, AppErrorKind, BundleChoice, CallbackRequest, CallbackResponse, CaseData,
    CaseDetails, DocumentReference, DraftOrdersReviewData, GeneratedOrder, HearingBooking,
    HearingOrder, HearingOrderKind, HearingOrderStatus, HearingOrdersBundle, HearingType,
    LegacyCaseManagementOrder, LegacyCmoAction, LegacyCmoActionDetails, LegacyCmoStatus,
    OrderSummary, PendingBundles, ReviewDecision, ReviewOutcome, ReviewPageResponse, State,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::health;
use crate::rest;
use crate::state::AppState;

/// OpenAPI documentation for the callback API.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::approve_orders::about_to_start,
        rest::approve_orders::populate_selected_bundle,
        rest::approve_orders::validate,
        rest::approve_orders::about_to_submit,
        rest::approve_orders::submitted,
        rest::migrate::migrate_bundles,
        rest::progress_cmo::about_to_submit,
        health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        CallbackRequest,
        CallbackResponse,
        CaseDetails,
        CaseData,
        State,
        DocumentReference,
        HearingBooking,
        HearingType,
        HearingOrder,
        HearingOrderKind,
        HearingOrderStatus,
        HearingOrdersBundle,
        GeneratedOrder,
        LegacyCaseManagementOrder,
        LegacyCmoAction,
        LegacyCmoActionDetails,
        LegacyCmoStatus,
        ReviewDecision,
        ReviewOutcome,
        PendingBundles,
        BundleChoice,
        OrderSummary,
        DraftOrdersReviewData,
        ReviewPageResponse,
    )),
    info(
        title = "CMO Review Service",
        description = "Callback service for the draft order / case management order review lifecycle",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build the full application router: callbacks, health, and `/docs`.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
