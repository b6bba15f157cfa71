//! Stored resume documents read for layout.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`; production uses PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeDocument, ResumeDocumentRow};

#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn fetch_document(&self, id: Uuid) -> Result<Option<ResumeDocument>, AppError>;
}

/// Reads documents from the `resume_documents` table (`document` is JSONB).
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn fetch_document(&self, id: Uuid) -> Result<Option<ResumeDocument>, AppError> {
        let row = sqlx::query_as::<_, ResumeDocumentRow>(
            "SELECT * FROM resume_documents WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        debug!(resume_id = %id, user_id = %row.user_id, "Loaded stored resume");
        parse_document(id, row.document).map(Some)
    }
}

fn parse_document(id: Uuid, document: serde_json::Value) -> Result<ResumeDocument, AppError> {
    serde_json::from_value(document).map_err(|e| {
        AppError::UnprocessableEntity(format!("Stored resume {id} is malformed: {e}"))
    })
}
