pub mod case;
pub mod common;
pub mod config;
pub mod decision;
pub mod error;
pub mod hearing;
pub mod legacy;
pub mod order;
pub mod requests;

pub use case::{CaseData, State};
pub use common::{DocumentReference, Element};
pub use config::{AppConfig, FeatureFlags};
pub use decision::{ReviewDecision, ReviewOutcome};
pub use error::{AppError, AppErrorKind};
pub use hearing::{HearingBooking, HearingType};
pub use legacy::{
    LegacyCaseManagementOrder, LegacyCmoAction, LegacyCmoActionDetails, LegacyCmoStatus,
};
pub use order::{
    GeneratedOrder, HearingOrder, HearingOrderKind, HearingOrderStatus, HearingOrdersBundle,
};
pub use requests::{
    BundleChoice, CallbackRequest, CallbackResponse, CaseDetails, DraftOrdersReviewData,
    OrderSummary, PendingBundles, ReviewPageResponse,
};
