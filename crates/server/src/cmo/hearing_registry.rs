//! Lookups and link maintenance over the case's hearing list.

use shared_types::{CaseData, Element, HearingBooking};
use uuid::Uuid;

/// The hearing whose linked CMO is `order_id`. Non-CMO orders carry no
/// hearing link, so `None` is an expected answer, not a failure.
pub fn find_hearing_for(case: &CaseData, order_id: Uuid) -> Option<&Element<HearingBooking>> {
    case.hearing_linked_to_cmo(order_id)
}

/// Clear the linked-CMO reference on the hearing pointing at `order_id`.
/// No-op when no hearing holds the link.
pub fn clear_link(case: &mut CaseData, order_id: Uuid) {
    if let Some(hearing) = case
        .hearing_details
        .iter_mut()
        .find(|hearing| hearing.value.case_management_order_id == Some(order_id))
    {
        hearing.value.case_management_order_id = None;
    }
}

/// The chronologically next hearing after the one `order_id` is linked to.
/// Used to decide the final-hearing state transition after a CMO is sealed,
/// so it must be called while the link is still intact.
pub fn next_hearing_after(case: &CaseData, order_id: Uuid) -> Option<&HearingBooking> {
    case.next_hearing_after_cmo(order_id)
}
