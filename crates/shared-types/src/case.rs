use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Element;
use crate::decision::ReviewDecision;
use crate::hearing::HearingBooking;
use crate::legacy::LegacyCaseManagementOrder;
use crate::order::{GeneratedOrder, HearingOrder, HearingOrderStatus, HearingOrdersBundle};

/// Case lifecycle state held by the external platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
    Submitted,
    Gatekeeping,
    CaseManagement,
    FinalHearing,
    Closed,
}

/// Typed view of the case snapshot handed to each callback.
///
/// The platform owns this aggregate; the service mutates a copy for the
/// duration of one invocation and hands it back. Nothing here outlives the
/// callback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CaseData {
    #[serde(default)]
    pub hearing_details: Vec<Element<HearingBooking>>,
    /// Legacy flat list of draft CMOs, superseded by per-hearing bundles.
    /// Still populated on unmigrated cases and consumed by the migration.
    #[serde(default)]
    pub draft_uploaded_cmos: Vec<Element<HearingOrder>>,
    #[serde(default)]
    pub hearing_orders_bundles_drafts: Vec<Element<HearingOrdersBundle>>,
    /// Permanent sealed-CMO history, append-only.
    #[serde(default)]
    pub sealed_cmos: Vec<Element<HearingOrder>>,
    /// Permanent collection of generated (sealed non-CMO) orders.
    #[serde(default)]
    pub order_collection: Vec<Element<GeneratedOrder>>,
    /// Judge's decision for the CMO in the selected bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_cmo_decision: Option<ReviewDecision>,
    /// Judge's decisions for the non-CMO orders of the selected bundle, in
    /// the bundle's order.
    #[serde(default)]
    pub review_decisions: Vec<ReviewDecision>,
    /// Explicit bundle choice when several bundles are pending review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmo_to_review: Option<Uuid>,
    /// The CMO resolved by the last review, carried in the snapshot until the
    /// post-submit callback has dispatched its notification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_cmo: Option<Element<HearingOrder>>,
    /// Sealed and rejected non-CMO orders awaiting distribution, likewise
    /// carried only between submit and post-submit.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub orders_to_be_sent: Vec<Element<HearingOrder>>,
    /// The single CMO on unmigrated cases, driven by the frozen legacy flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_management_order: Option<LegacyCaseManagementOrder>,
    /// Legacy CMOs already shared with the parties, append-only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub served_case_management_orders: Vec<Element<LegacyCaseManagementOrder>>,
}

impl CaseData {
    /// Bundles containing at least one order awaiting the judge.
    pub fn bundles_for_approval(&self) -> Vec<&Element<HearingOrdersBundle>> {
        self.hearing_orders_bundles_drafts
            .iter()
            .filter(|bundle| {
                !bundle
                    .value
                    .orders_with_status(HearingOrderStatus::SendToJudge)
                    .is_empty()
            })
            .collect()
    }

    /// The hearing whose linked CMO is `cmo_id`, if any. Non-CMO orders have
    /// no hearing link, so absence is not an error.
    pub fn hearing_linked_to_cmo(&self, cmo_id: Uuid) -> Option<&Element<HearingBooking>> {
        self.hearing_details
            .iter()
            .find(|hearing| hearing.value.case_management_order_id == Some(cmo_id))
    }

    /// The chronologically next hearing after the one linked to `cmo_id`.
    pub fn next_hearing_after_cmo(&self, cmo_id: Uuid) -> Option<&HearingBooking> {
        let linked = self.hearing_linked_to_cmo(cmo_id)?;
        self.hearing_details
            .iter()
            .map(|hearing| &hearing.value)
            .filter(|hearing| hearing.starts_at > linked.value.starts_at)
            .min_by_key(|hearing| hearing.starts_at)
    }
}
