//! Draft-order / CMO review subsystem.
//!
//! Orders are uploaded in draft, bundled per hearing, routed to the judge,
//! and independently approved, amended, or rejected. The orchestrator keeps
//! hearings, bundles, and the sealed-order history consistent after each
//! review submission; `bundle_index` also carries the one-off migration from
//! the legacy flat CMO list into per-hearing bundles.

pub mod bundle_index;
pub mod hearing_registry;
pub mod legacy;
pub mod orchestrator;
pub mod review_validator;
pub mod sealing;
