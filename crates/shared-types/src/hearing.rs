use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of hearing listed on the case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HearingType {
    CaseManagement,
    FurtherCaseManagement,
    IssueResolution,
    Final,
    Other,
}

impl HearingType {
    fn display_name(&self) -> &'static str {
        match self {
            HearingType::CaseManagement => "Case management hearing",
            HearingType::FurtherCaseManagement => "Further case management hearing",
            HearingType::IssueResolution => "Issue resolution hearing",
            HearingType::Final => "Final hearing",
            HearingType::Other => "Hearing",
        }
    }
}

/// A hearing booked on the case.
///
/// `case_management_order_id` is the back-reference to the CMO currently
/// awaiting resolution for this hearing. It is cleared when that CMO is
/// sealed; a rejected CMO keeps the link so a corrected draft can replace it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct HearingBooking {
    #[serde(rename = "type")]
    pub hearing_type: HearingType,
    pub starts_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_title_and_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_management_order_id: Option<Uuid>,
}

impl HearingBooking {
    pub fn is_of_type(&self, hearing_type: HearingType) -> bool {
        self.hearing_type == hearing_type
    }

    /// Display label used for bundle names and notifications,
    /// e.g. "Case management hearing, 2 September 2026".
    pub fn label(&self) -> String {
        format!(
            "{}, {}",
            self.hearing_type.display_name(),
            self.starts_at.format("%-d %B %Y")
        )
    }
}
