use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared_types::{AppError, DocumentReference};

// --- Environment helpers ---

fn docmosis_render_url() -> Result<String, AppError> {
    std::env::var("DOCMOSIS_RENDER_URL")
        .map_err(|_| AppError::internal("DOCMOSIS_RENDER_URL is not configured"))
}

fn docmosis_access_key() -> Result<String, AppError> {
    std::env::var("DOCMOSIS_ACCESS_KEY")
        .map_err(|_| AppError::internal("DOCMOSIS_ACCESS_KEY is not configured"))
}

// --- Renderer seam ---

/// External document-rendering collaborator.
///
/// Sealing itself (court-seal stamping, storage of the authoritative copy)
/// happens outside this service; callers only see the stored reference that
/// comes back. Failures propagate — no retry is attempted here.
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    /// Produce the sealed, authoritative version of an uploaded draft
    /// document and return its stored reference.
    async fn seal_document(
        &self,
        document: &DocumentReference,
    ) -> Result<DocumentReference, AppError>;
}

// --- Docmosis client ---

/// Request body posted to the rendering service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct SealRequest {
    access_key: String,
    output_name: String,
    document_binary_url: String,
}

/// Stored document returned by the rendering service.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SealResponse {
    document: DocumentReference,
}

pub struct DocmosisClient {
    client: reqwest::Client,
}

impl DocmosisClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    fn seal_request(document: &DocumentReference, access_key: String) -> SealRequest {
        SealRequest {
            access_key,
            output_name: document.document_filename.clone(),
            document_binary_url: document.document_binary_url.clone(),
        }
    }
}

impl Default for DocmosisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentRenderer for DocmosisClient {
    #[tracing::instrument(skip(self, document), fields(filename = %document.document_filename))]
    async fn seal_document(
        &self,
        document: &DocumentReference,
    ) -> Result<DocumentReference, AppError> {
        let url = docmosis_render_url()?;
        let body = Self::seal_request(document, docmosis_access_key()?);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("Render request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::upstream(format!(
                "Render service error ({}): {}",
                status, text
            )));
        }

        let sealed: SealResponse = response
            .json()
            .await
            .map_err(|e| AppError::upstream(format!("Malformed render response: {}", e)))?;

        tracing::info!(filename = %sealed.document.document_filename, "Document sealed");
        Ok(sealed.document)
    }
}

// --- Pass-through renderer ---

/// Renderer used when the `docmosis` feature flag is off (local runs, tests).
/// Hands the unsealed document straight back.
pub struct PassThroughRenderer;

#[async_trait]
impl DocumentRenderer for PassThroughRenderer {
    async fn seal_document(
        &self,
        document: &DocumentReference,
    ) -> Result<DocumentReference, AppError> {
        tracing::warn!(
            filename = %document.document_filename,
            "Docmosis disabled — returning unsealed document"
        );
        Ok(document.clone())
    }
}
