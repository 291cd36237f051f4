//! Types for the deprecated single-CMO progression flow.
//!
//! Cases created before per-hearing bundling carry exactly one CMO object
//! whose status drives the review round-trip between judge and filer. These
//! types are intentionally not shared with the bundle-based model; the flow
//! is frozen and will be deleted once no unmigrated case remains.

use serde::{Deserialize, Serialize};

use crate::common::DocumentReference;

/// Status carried by the legacy single CMO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegacyCmoStatus {
    /// With the judge, awaiting a decision.
    SendToJudge,
    /// Back with the filer for rework.
    SelfReview,
    /// Shared with the parties, awaiting consensus.
    PartiesReview,
}

/// Action recorded by the judge on the legacy CMO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegacyCmoAction {
    SendToAllParties,
    JudgeRequestedChange,
    SelfReview,
}

/// The deprecated single-CMO object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LegacyCaseManagementOrder {
    pub status: LegacyCmoStatus,
    pub order_doc: DocumentReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearing_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<LegacyCmoActionDetails>,
}

/// The judge's recorded action plus any change request text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LegacyCmoActionDetails {
    #[serde(rename = "type")]
    pub action_type: LegacyCmoAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_requested_by_judge: Option<String>,
}
