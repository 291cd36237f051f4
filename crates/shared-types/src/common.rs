use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Element wrapper ─────────────────────────────────────────────────

/// A uuid-keyed entry in one of the case platform's collections.
///
/// Every list the platform stores is a list of `{ "id": ..., "value": ... }`
/// objects so that entries stay addressable across callbacks even when the
/// list is reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Element<T> {
    pub id: Uuid,
    pub value: T,
}

impl<T> Element<T> {
    /// Wrap a value with a freshly generated id.
    pub fn new(value: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
        }
    }

    /// Wrap a value under an existing id.
    pub fn with_id(id: Uuid, value: T) -> Self {
        Self { id, value }
    }
}

// ── Document reference ──────────────────────────────────────────────

/// Pointer into the external document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DocumentReference {
    pub document_filename: String,
    pub document_url: String,
    pub document_binary_url: String,
}

impl DocumentReference {
    pub fn new(
        filename: impl Into<String>,
        url: impl Into<String>,
        binary_url: impl Into<String>,
    ) -> Self {
        Self {
            document_filename: filename.into(),
            document_url: url.into(),
            document_binary_url: binary_url.into(),
        }
    }
}
