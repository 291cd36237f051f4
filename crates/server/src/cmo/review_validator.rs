//! Stateless validation of a single reviewer decision.

use shared_types::{ReviewDecision, ReviewOutcome};

/// Validate one decision payload against the order it applies to.
///
/// Returns user-facing violations tagged with the order's display label so a
/// reviewer deciding several orders in one bundle can tell the messages
/// apart. An unsubmitted decision produces no violations here — "nothing was
/// decided at all" is the orchestrator's call to make.
pub fn validate(decision: &ReviewDecision, order_label: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if decision.has_outcome_of(ReviewOutcome::JudgeRequestedChanges)
        && decision
            .changes_requested_by_judge
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .is_empty()
    {
        errors.push(format!(
            "Add what the judge changed on the {}",
            order_label
        ));
    }

    errors
}
