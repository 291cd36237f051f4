//! Deprecated single-CMO progression flow.
//!
//! Cases that predate per-hearing bundling carry one CMO object whose status
//! drives the round-trip between judge and filer. This path is frozen: it
//! shares no types with the bundle flow and is never invoked for bundled
//! cases. Delete once no unmigrated case remains.

use shared_types::{
    LegacyCaseManagementOrder, LegacyCmoAction, LegacyCmoStatus,
};

/// Result of progressing the legacy CMO one step.
#[derive(Debug, Clone, PartialEq)]
pub enum LegacyProgression {
    /// No judge action recorded, or the CMO is not with the judge.
    Unchanged(LegacyCaseManagementOrder),
    /// Returned to the filer for rework, carrying the requested changes.
    ReturnedToFiler(LegacyCaseManagementOrder),
    /// Served on the parties for consensus; append to the served list.
    SharedWithParties(LegacyCaseManagementOrder),
}

/// Apply the judge's recorded action to a legacy CMO.
///
/// Only a CMO in `SendToJudge` with an action moves; everything else passes
/// through untouched. The recorded action is consumed by the transition.
pub fn progress(cmo: &LegacyCaseManagementOrder) -> LegacyProgression {
    if cmo.status != LegacyCmoStatus::SendToJudge {
        return LegacyProgression::Unchanged(cmo.clone());
    }

    let action = match &cmo.action {
        Some(action) => action,
        None => return LegacyProgression::Unchanged(cmo.clone()),
    };

    match action.action_type {
        LegacyCmoAction::SendToAllParties => {
            let mut served = cmo.clone();
            served.status = LegacyCmoStatus::PartiesReview;
            served.action = None;
            tracing::info!("Legacy CMO served on all parties");
            LegacyProgression::SharedWithParties(served)
        }
        LegacyCmoAction::JudgeRequestedChange | LegacyCmoAction::SelfReview => {
            let mut returned = cmo.clone();
            returned.status = LegacyCmoStatus::SelfReview;
            // The change text survives the transition so the filer can act on
            // it; the action itself does not.
            let changes = action.change_requested_by_judge.clone();
            returned.action = None;
            if let Some(changes) = changes {
                tracing::info!(%changes, "Legacy CMO returned to filer");
                returned.action = Some(shared_types::LegacyCmoActionDetails {
                    action_type: LegacyCmoAction::JudgeRequestedChange,
                    change_requested_by_judge: Some(changes),
                });
            }
            LegacyProgression::ReturnedToFiler(returned)
        }
    }
}
