use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{DocumentReference, Element};
use crate::hearing::HearingBooking;

// ── Draft order kinds and statuses ──────────────────────────────────

/// Kind of order filed for judicial approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HearingOrderKind {
    /// Case management order agreed between the parties before filing.
    AgreedCmo,
    /// Case management order still under discussion between advocates.
    DraftCmo,
    /// Any other draft order filed alongside (or instead of) a CMO.
    C21,
}

impl HearingOrderKind {
    pub fn is_cmo(&self) -> bool {
        matches!(self, HearingOrderKind::AgreedCmo | HearingOrderKind::DraftCmo)
    }
}

/// Lifecycle status of a draft order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HearingOrderStatus {
    /// Uploaded but not yet submitted for review.
    Draft,
    /// Awaiting the judge's decision.
    SendToJudge,
    /// Sealed; kept on the order only until it is moved into history.
    Approved,
}

// ── HearingOrder ────────────────────────────────────────────────────

/// A draft order (CMO or otherwise) uploaded against a hearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct HearingOrder {
    #[serde(rename = "type")]
    pub kind: HearingOrderKind,
    pub status: HearingOrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Label of the hearing this order was filed for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearing: Option<String>,
    pub order: DocumentReference,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supporting_docs: Vec<Element<DocumentReference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_title_and_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_sent: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_issued: Option<NaiveDate>,
    /// Free text set when the judge returns the order for changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_changes: Option<String>,
}

impl HearingOrder {
    /// Display label used to tag validation messages and notifications.
    pub fn display_label(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| "draft order".to_string())
    }
}

// ── HearingOrdersBundle ─────────────────────────────────────────────

/// The set of draft orders awaiting review for one hearing.
///
/// A bundle with no orders must not persist; the orchestrator removes it as
/// soon as its last order is resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct HearingOrdersBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearing_id: Option<Uuid>,
    /// Denormalized hearing label for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearing_name: Option<String>,
    #[serde(default)]
    pub orders: Vec<Element<HearingOrder>>,
}

impl HearingOrdersBundle {
    pub fn empty() -> Self {
        Self {
            hearing_id: None,
            hearing_name: None,
            orders: Vec::new(),
        }
    }

    /// Point this bundle at a hearing, refreshing the denormalized label.
    pub fn update_hearing(&mut self, hearing_id: Uuid, hearing: &HearingBooking) {
        self.hearing_id = Some(hearing_id);
        self.hearing_name = Some(hearing.label());
    }

    pub fn orders_with_status(&self, status: HearingOrderStatus) -> Vec<&Element<HearingOrder>> {
        self.orders
            .iter()
            .filter(|order| order.value.status == status)
            .collect()
    }

    /// The CMO awaiting review in this bundle, if any. A bundle holds at most
    /// one CMO-kind order.
    pub fn cmo_awaiting_review(&self) -> Option<&Element<HearingOrder>> {
        self.orders
            .iter()
            .find(|order| order.value.status == HearingOrderStatus::SendToJudge && order.value.kind.is_cmo())
    }

    /// Non-CMO draft orders, in their filed order.
    pub fn draft_orders(&self) -> Vec<&Element<HearingOrder>> {
        self.orders
            .iter()
            .filter(|order| !order.value.kind.is_cmo())
            .collect()
    }
}

// ── GeneratedOrder ──────────────────────────────────────────────────

/// Record added to the case's permanent order collection when a non-CMO
/// draft order is sealed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GeneratedOrder {
    #[serde(rename = "type")]
    pub order_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub document: DocumentReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_title_and_name: Option<String>,
    pub date_of_issue: String,
}
