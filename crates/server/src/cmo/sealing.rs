//! Turning an approved draft into a sealed order, and a rejected draft into
//! the artifact returned to the filer.

use chrono::Utc;
use shared_types::{AppError, Element, HearingOrder, HearingOrderStatus};

use crate::docmosis::DocumentRenderer;

/// Seal an approved order.
///
/// Delegates document finalization to the rendering collaborator; a failure
/// there propagates untouched — no retry, no partial artifact. The element id
/// is preserved so hearing links and history stay traceable to the draft.
pub async fn seal(
    renderer: &dyn DocumentRenderer,
    order: &Element<HearingOrder>,
) -> Result<Element<HearingOrder>, AppError> {
    let sealed_document = renderer.seal_document(&order.value.order).await?;

    let mut sealed = order.value.clone();
    sealed.status = HearingOrderStatus::Approved;
    sealed.order = sealed_document;
    sealed.date_issued = Some(Utc::now().date_naive());
    sealed.requested_changes = None;

    Ok(Element::with_id(order.id, sealed))
}

/// Build the rejected variant of an order: the original, unsealed document
/// plus the judge's requested changes. Pure transformation, no external call.
pub fn reject(order: &Element<HearingOrder>, change_text: &str) -> Element<HearingOrder> {
    let mut rejected = order.value.clone();
    rejected.status = HearingOrderStatus::Draft;
    rejected.requested_changes = Some(change_text.to_string());

    Element::with_id(order.id, rejected)
}
