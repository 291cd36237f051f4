use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::case::{CaseData, State};
use crate::common::DocumentReference;

// ── Callback envelope ───────────────────────────────────────────────

/// The case identity and snapshot the platform posts to every callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CaseDetails {
    pub id: i64,
    pub state: State,
    pub data: CaseData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CallbackRequest {
    pub case_details: CaseDetails,
}

/// The mutated snapshot (plus any user-facing violations) handed back to the
/// platform. `errors` being non-empty tells the platform to re-prompt the
/// reviewer without persisting `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CallbackResponse {
    pub data: CaseData,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
}

impl CallbackResponse {
    pub fn with_data(data: CaseData) -> Self {
        Self {
            data,
            errors: Vec::new(),
            state: None,
        }
    }

    pub fn with_errors(data: CaseData, errors: Vec<String>) -> Self {
        Self {
            data,
            errors,
            state: None,
        }
    }
}

// ── Review page shapes ──────────────────────────────────────────────

/// How many bundles are pending review; drives the page the reviewer sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PendingBundles {
    None,
    Single,
    Multi,
}

/// One entry of the bundle selector shown when several bundles are pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BundleChoice {
    pub id: Uuid,
    pub label: String,
}

/// Display summary of one order within the bundle under review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub title: String,
    pub document: DocumentReference,
}

/// Everything the review page needs to render one bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DraftOrdersReviewData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearing_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmo: Option<OrderSummary>,
    #[serde(default)]
    pub draft_orders: Vec<OrderSummary>,
}

/// Response of the about-to-start callback for the review event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ReviewPageResponse {
    pub num_draft_cmos: PendingBundles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_data: Option<DraftOrdersReviewData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bundle_choices: Vec<BundleChoice>,
}
