use serde::Serialize;
use shared_types::{DocumentReference, Element, HearingOrder, HearingOrderStatus};

use crate::config::feature_flags;

// --- Environment helpers ---

fn notify_endpoint() -> Option<String> {
    std::env::var("NOTIFY_ENDPOINT").ok()
}

// --- Outbound payload ---

/// One sealed or rejected artifact handed to the notification collaborator.
/// Carries the metadata recipient resolution needs (hearing label, judge).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedOrderNotification {
    pub case_id: i64,
    pub title: String,
    pub outcome: NotificationOutcome,
    pub document: DocumentReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_title_and_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_changes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationOutcome {
    Sealed,
    Rejected,
}

impl IssuedOrderNotification {
    pub fn from_order(case_id: i64, order: &HearingOrder) -> Self {
        let outcome = if order.status == HearingOrderStatus::Approved {
            NotificationOutcome::Sealed
        } else {
            NotificationOutcome::Rejected
        };
        Self {
            case_id,
            title: order.display_label(),
            outcome,
            document: order.order.clone(),
            hearing: order.hearing.clone(),
            judge_title_and_name: order.judge_title_and_name.clone(),
            requested_changes: order.requested_changes.clone(),
        }
    }
}

// --- Dispatch ---

/// Client for the notification collaborator. Dispatch is fire-and-forget:
/// failures are logged and never fail the callback that produced the orders.
pub struct Notifier {
    client: reqwest::Client,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Send the post-review artifacts (sealed and rejected orders alike) to
    /// the notification service for distribution.
    #[tracing::instrument(skip(self, orders), fields(count = orders.len()))]
    pub async fn dispatch_issued_orders(&self, case_id: i64, orders: &[Element<HearingOrder>]) {
        if orders.is_empty() {
            return;
        }
        if !feature_flags().notifications {
            tracing::debug!(case_id, "Notifications disabled — skipping dispatch");
            return;
        }
        let Some(endpoint) = notify_endpoint() else {
            tracing::warn!(case_id, "NOTIFY_ENDPOINT not set — skipping dispatch");
            return;
        };

        let payload: Vec<IssuedOrderNotification> = orders
            .iter()
            .map(|order| IssuedOrderNotification::from_order(case_id, &order.value))
            .collect();

        match self.client.post(&endpoint).json(&payload).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!(case_id, count = payload.len(), "Issued orders dispatched");
            }
            Ok(response) => {
                tracing::error!(
                    case_id,
                    status = %response.status(),
                    "Notification service rejected dispatch"
                );
            }
            Err(e) => {
                tracing::error!(case_id, error = %e, "Failed to reach notification service");
            }
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
