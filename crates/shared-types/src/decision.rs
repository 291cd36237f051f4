use serde::{Deserialize, Serialize};

/// Outcome a judge can record against a single draft order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewOutcome {
    /// Approve as submitted and serve on all parties.
    SendToAllParties,
    /// Approve with the judge's own amendments already applied to the document.
    JudgeAmendsDraft,
    /// Return the draft with requested changes; nothing is sealed.
    JudgeRequestedChanges,
}

impl ReviewOutcome {
    /// Terminal approval outcomes produce a sealed order.
    pub fn is_approval(&self) -> bool {
        !matches!(self, ReviewOutcome::JudgeRequestedChanges)
    }
}

/// A judge's decision payload for one order in the bundle under review.
///
/// `decision` is `None` when the reviewer left this order untouched —
/// submission forms always post the block, populated or not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ReviewDecision {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<ReviewOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes_requested_by_judge: Option<String>,
}

impl ReviewDecision {
    pub fn is_submitted(&self) -> bool {
        self.decision.is_some()
    }

    pub fn has_outcome_of(&self, outcome: ReviewOutcome) -> bool {
        self.decision == Some(outcome)
    }
}
