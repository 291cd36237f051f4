pub mod approve_orders;
pub mod migrate;
pub mod progress_cmo;

use axum::{routing::post, Router};

use crate::state::AppState;

/// Build the callback API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route(
            "/callback/approve-draft-orders/about-to-start",
            post(approve_orders::about_to_start),
        )
        .route(
            "/callback/approve-draft-orders/populate-selected-bundle",
            post(approve_orders::populate_selected_bundle),
        )
        .route(
            "/callback/approve-draft-orders/validate",
            post(approve_orders::validate),
        )
        .route(
            "/callback/approve-draft-orders/about-to-submit",
            post(approve_orders::about_to_submit),
        )
        .route(
            "/callback/approve-draft-orders/submitted",
            post(approve_orders::submitted),
        )
        .route(
            "/callback/migrate-cmo-bundles/about-to-submit",
            post(migrate::migrate_bundles),
        )
        .route(
            "/callback/progress-cmo/about-to-submit",
            post(progress_cmo::about_to_submit),
        )
}
