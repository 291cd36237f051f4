//! Grouping of draft orders into per-hearing bundles, bundle selection for
//! review, and the one-off migration from the legacy flat CMO list.

use shared_types::{
    AppError, CaseData, Element, HearingOrder, HearingOrderKind, HearingOrdersBundle,
};
use uuid::Uuid;

/// Outcome of resolving which bundle the reviewer is working on.
#[derive(Debug, Clone, PartialEq)]
pub enum BundleSelection {
    /// Nothing is awaiting approval — a terminal, non-error outcome.
    None,
    Selected(Element<HearingOrdersBundle>),
}

/// Bundles containing at least one order awaiting the judge, in case order.
pub fn bundles_awaiting_approval(case: &CaseData) -> Vec<&Element<HearingOrdersBundle>> {
    case.bundles_for_approval()
}

/// Resolve the bundle under review.
///
/// A single pending bundle is auto-selected so the reviewer never sees a
/// selector for it; several pending bundles require the explicit
/// `cmo_to_review` choice. The asymmetry is deliberate and load-bearing for
/// the review screens.
pub fn select_bundle(case: &CaseData) -> Result<BundleSelection, AppError> {
    let pending = bundles_awaiting_approval(case);

    match pending.len() {
        0 => Ok(BundleSelection::None),
        1 => Ok(BundleSelection::Selected((*pending[0]).clone())),
        _ => {
            let chosen_id = case.cmo_to_review.ok_or_else(|| {
                AppError::bad_request("Select which hearing's draft orders to review")
            })?;
            pending
                .into_iter()
                .find(|bundle| bundle.id == chosen_id)
                .map(|bundle| BundleSelection::Selected(bundle.clone()))
                .ok_or_else(|| {
                    AppError::not_found(format!("No draft orders bundle {} on case", chosen_id))
                })
        }
    }
}

/// Remove a resolved order from its bundle. A bundle emptied by the removal
/// is dropped from the index entirely — empty bundles must not persist.
pub fn remove_order(case: &mut CaseData, bundle_id: Uuid, order_id: Uuid) {
    if let Some(bundle) = case
        .hearing_orders_bundles_drafts
        .iter_mut()
        .find(|bundle| bundle.id == bundle_id)
    {
        bundle.value.orders.retain(|order| order.id != order_id);
    }
    case.hearing_orders_bundles_drafts
        .retain(|bundle| !(bundle.id == bundle_id && bundle.value.orders.is_empty()));
}

/// One-off adapter from the legacy flat CMO list into per-hearing bundles.
///
/// Idempotent: any draft CMO already present in a bundle is stripped first
/// and re-filed from the flat list, so running twice yields the same result.
/// A CMO whose linked hearing cannot be resolved is skipped — logged for
/// operators, never fatal to the rest of the migration.
pub fn migrate_flat_list_to_bundles(case: &mut CaseData) {
    let draft_ids: Vec<Uuid> = case.draft_uploaded_cmos.iter().map(|cmo| cmo.id).collect();
    for bundle in &mut case.hearing_orders_bundles_drafts {
        bundle
            .value
            .orders
            .retain(|order| !draft_ids.contains(&order.id));
    }

    let drafts: Vec<Element<HearingOrder>> = case.draft_uploaded_cmos.clone();
    for mut draft in drafts {
        let Some(hearing) = case.hearing_linked_to_cmo(draft.id) else {
            tracing::warn!(
                order_id = %draft.id,
                "Draft CMO has no linked hearing — skipped during bundle migration"
            );
            continue;
        };
        let hearing_id = hearing.id;
        let hearing_booking = hearing.value.clone();

        if draft.value.title.is_none() {
            draft.value.title = Some(default_migration_title(draft.value.kind).to_string());
        }

        match case
            .hearing_orders_bundles_drafts
            .iter_mut()
            .find(|bundle| bundle.value.hearing_id == Some(hearing_id))
        {
            Some(bundle) => bundle.value.orders.push(draft),
            None => {
                let mut bundle = HearingOrdersBundle::empty();
                bundle.update_hearing(hearing_id, &hearing_booking);
                bundle.orders.push(draft);
                case.hearing_orders_bundles_drafts.push(Element::new(bundle));
            }
        }
    }

    case.hearing_orders_bundles_drafts
        .retain(|bundle| !bundle.value.orders.is_empty());
}

fn default_migration_title(kind: HearingOrderKind) -> &'static str {
    match kind {
        HearingOrderKind::AgreedCmo => "Agreed CMO discussed at hearing",
        HearingOrderKind::DraftCmo | HearingOrderKind::C21 => "Draft CMO from advocates' meeting",
    }
}
