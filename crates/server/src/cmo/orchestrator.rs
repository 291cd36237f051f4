//! Coordination of one review submission over the selected bundle.
//!
//! Resolution is two-phase: every approval is rendered first, and the case
//! snapshot is only mutated once all renders have succeeded. A rendering
//! failure therefore leaves hearings, bundles, and history untouched instead
//! of committing half a bundle.

use shared_types::{
    AppError, BundleChoice, CaseData, DraftOrdersReviewData, Element, GeneratedOrder, HearingOrder,
    HearingOrdersBundle, HearingType, OrderSummary, PendingBundles, ReviewDecision, ReviewOutcome,
    ReviewPageResponse, State,
};
use uuid::Uuid;

use crate::cmo::bundle_index::{self, BundleSelection};
use crate::cmo::hearing_registry;
use crate::cmo::review_validator;
use crate::cmo::sealing;
use crate::docmosis::DocumentRenderer;

/// Catch-all violation raised when a bundle holds orders but the reviewer
/// decided none of them.
const NO_DECISION_ERROR: &str = "Approve, amend or reject draft orders";

/// Outcome of one review submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewResult {
    /// No bundle is awaiting approval; terminal, nothing was mutated.
    NothingToReview,
    /// The submission failed validation; nothing was mutated.
    Violations(Vec<String>),
    Resolved(ResolvedReview),
}

/// Artifacts and state effects of a successful resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedReview {
    /// The resolved CMO (sealed or rejected), notified through its own path.
    pub cmo: Option<Element<HearingOrder>>,
    /// Sealed and rejected non-CMO orders, in bundle order, for distribution.
    pub orders_to_be_sent: Vec<Element<HearingOrder>>,
    /// Set when the case progresses to the final-hearing state.
    pub new_state: Option<State>,
}

// ── Page controls ───────────────────────────────────────────────────

/// Build the about-to-start page for the review event: nothing pending, a
/// single auto-selected bundle, or a selector over several bundles.
pub fn page_controls(case: &CaseData) -> ReviewPageResponse {
    let pending = bundle_index::bundles_awaiting_approval(case);

    match pending.len() {
        0 => ReviewPageResponse {
            num_draft_cmos: PendingBundles::None,
            review_data: None,
            bundle_choices: Vec::new(),
        },
        1 => ReviewPageResponse {
            num_draft_cmos: PendingBundles::Single,
            review_data: Some(build_review_data(&pending[0].value)),
            bundle_choices: Vec::new(),
        },
        _ => ReviewPageResponse {
            num_draft_cmos: PendingBundles::Multi,
            review_data: None,
            bundle_choices: pending
                .iter()
                .map(|bundle| BundleChoice {
                    id: bundle.id,
                    label: bundle
                        .value
                        .hearing_name
                        .clone()
                        .unwrap_or_else(|| "Unlisted hearing".to_string()),
                })
                .collect(),
        },
    }
}

/// Display data for the selected bundle, shown once a choice is made.
pub fn selected_bundle_review_data(case: &CaseData) -> Result<DraftOrdersReviewData, AppError> {
    match bundle_index::select_bundle(case)? {
        BundleSelection::None => Err(AppError::not_found("No draft orders ready for approval")),
        BundleSelection::Selected(bundle) => Ok(build_review_data(&bundle.value)),
    }
}

fn build_review_data(bundle: &HearingOrdersBundle) -> DraftOrdersReviewData {
    DraftOrdersReviewData {
        hearing_name: bundle.hearing_name.clone(),
        cmo: bundle.cmo_awaiting_review().map(|cmo| OrderSummary {
            title: cmo.value.display_label(),
            document: cmo.value.order.clone(),
        }),
        draft_orders: bundle
            .draft_orders()
            .iter()
            .map(|order| OrderSummary {
                title: order.value.display_label(),
                document: order.value.order.clone(),
            })
            .collect(),
    }
}

// ── Validation ──────────────────────────────────────────────────────

/// Validate every decision submitted against the selected bundle. Collects
/// all violations; adds the catch-all when nothing was decided at all.
pub fn validate_review(case: &CaseData) -> Result<Vec<String>, AppError> {
    let bundle = match bundle_index::select_bundle(case)? {
        BundleSelection::None => return Ok(Vec::new()),
        BundleSelection::Selected(bundle) => bundle,
    };

    let mut errors = Vec::new();
    let mut any_decision = false;
    let mut counter = 1usize;

    for order in &bundle.value.orders {
        if order.value.kind.is_cmo() {
            if let Some(decision) = submitted(&case.review_cmo_decision) {
                any_decision = true;
                errors.extend(review_validator::validate(decision, "CMO"));
            }
        } else {
            if let Some(decision) = submitted_at(&case.review_decisions, counter - 1) {
                any_decision = true;
                errors.extend(review_validator::validate(
                    decision,
                    &format!("draft order {}", counter),
                ));
            }
            counter += 1;
        }
    }

    if !bundle.value.orders.is_empty() && !any_decision {
        errors.push(NO_DECISION_ERROR.to_string());
    }

    Ok(errors)
}

fn submitted(decision: &Option<ReviewDecision>) -> Option<&ReviewDecision> {
    decision.as_ref().filter(|d| d.is_submitted())
}

fn submitted_at(decisions: &[ReviewDecision], index: usize) -> Option<&ReviewDecision> {
    decisions.get(index).filter(|d| d.is_submitted())
}

// ── Resolution ──────────────────────────────────────────────────────

/// One planned per-order outcome, staged before any snapshot mutation.
enum PlannedOutcome {
    Sealed(Element<HearingOrder>),
    Rejected(Element<HearingOrder>),
}

/// Run one review submission end to end: select, validate, render, commit.
pub async fn review(
    case: &mut CaseData,
    renderer: &dyn DocumentRenderer,
) -> Result<ReviewResult, AppError> {
    let bundle = match bundle_index::select_bundle(case)? {
        BundleSelection::None => return Ok(ReviewResult::NothingToReview),
        BundleSelection::Selected(bundle) => bundle,
    };

    let errors = validate_review(case)?;
    if !errors.is_empty() {
        return Ok(ReviewResult::Violations(errors));
    }

    // Render phase. Nothing on the snapshot changes until every render of
    // this submission has succeeded.
    let cmo_plan = match bundle.value.cmo_awaiting_review() {
        Some(cmo) => match submitted(&case.review_cmo_decision) {
            Some(decision) => Some((cmo.clone(), plan_outcome(renderer, cmo, decision).await?)),
            None => None,
        },
        None => None,
    };

    let mut draft_plans = Vec::new();
    for (index, order) in bundle.value.draft_orders().into_iter().enumerate() {
        if let Some(decision) = submitted_at(&case.review_decisions, index) {
            draft_plans.push((order.clone(), plan_outcome(renderer, order, decision).await?));
        }
    }

    // Commit phase.
    let mut resolved = ResolvedReview::default();

    if let Some((cmo, outcome)) = cmo_plan {
        match outcome {
            PlannedOutcome::Sealed(sealed) => {
                resolved.new_state = final_hearing_transition(case, &case.review_cmo_decision, cmo.id);
                case.sealed_cmos.push(sealed.clone());
                hearing_registry::clear_link(case, cmo.id);
                resolved.cmo = Some(sealed);
            }
            PlannedOutcome::Rejected(rejected) => {
                // Rejection leaves the hearing link intact; a corrected draft
                // will reuse it.
                resolved.cmo = Some(rejected);
            }
        }
        case.draft_uploaded_cmos.retain(|draft| draft.id != cmo.id);
        bundle_index::remove_order(case, bundle.id, cmo.id);
    }

    for (order, outcome) in draft_plans {
        match outcome {
            PlannedOutcome::Sealed(sealed) => {
                case.order_collection
                    .push(Element::new(generated_order(&bundle.value, &sealed.value)));
                resolved.orders_to_be_sent.push(sealed);
            }
            PlannedOutcome::Rejected(rejected) => {
                resolved.orders_to_be_sent.push(rejected);
            }
        }
        bundle_index::remove_order(case, bundle.id, order.id);
    }

    // Decision fields are transient; drop them so the next review starts clean.
    case.review_cmo_decision = None;
    case.review_decisions.clear();
    case.cmo_to_review = None;

    tracing::info!(
        cmo_resolved = resolved.cmo.is_some(),
        orders_resolved = resolved.orders_to_be_sent.len(),
        "Draft orders bundle reviewed"
    );

    Ok(ReviewResult::Resolved(resolved))
}

async fn plan_outcome(
    renderer: &dyn DocumentRenderer,
    order: &Element<HearingOrder>,
    decision: &ReviewDecision,
) -> Result<PlannedOutcome, AppError> {
    match decision.decision {
        Some(outcome) if outcome.is_approval() => {
            Ok(PlannedOutcome::Sealed(sealing::seal(renderer, order).await?))
        }
        _ => {
            let changes = decision.changes_requested_by_judge.as_deref().unwrap_or_default();
            Ok(PlannedOutcome::Rejected(sealing::reject(order, changes)))
        }
    }
}

/// A CMO approved for all parties pushes the case into the final-hearing
/// state when the immediately-following hearing is the final one. Must run
/// while the hearing link is still intact.
fn final_hearing_transition(
    case: &CaseData,
    decision: &Option<ReviewDecision>,
    cmo_id: Uuid,
) -> Option<State> {
    let decision = decision.as_ref()?;
    if !decision.has_outcome_of(ReviewOutcome::SendToAllParties) {
        return None;
    }
    hearing_registry::next_hearing_after(case, cmo_id)
        .filter(|next| next.is_of_type(HearingType::Final))
        .map(|_| State::FinalHearing)
}

/// Most recently sealed CMO in the case's history. Callers only ask after a
/// sealing event, so an empty history is a data error, not a user one.
pub fn latest_sealed_cmo(case: &CaseData) -> Result<&Element<HearingOrder>, AppError> {
    case.sealed_cmos
        .last()
        .ok_or_else(|| AppError::not_found("No sealed CMOs on case"))
}

fn generated_order(bundle: &HearingOrdersBundle, sealed: &HearingOrder) -> GeneratedOrder {
    GeneratedOrder {
        order_type: "Blank order (C21)".to_string(),
        title: sealed.title.clone(),
        document: sealed.order.clone(),
        judge_title_and_name: sealed.judge_title_and_name.clone().or_else(|| {
            bundle
                .orders
                .first()
                .and_then(|order| order.value.judge_title_and_name.clone())
        }),
        date_of_issue: sealed
            .date_issued
            .map(|date| date.format("%-d %B %Y").to_string())
            .unwrap_or_default(),
    }
}
