//! Trait abstraction for submission handling to enable mocking in tests

use crate::validation::{FormValues, UnknownRevenueBucket};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Proof that a registration was handed off
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub store_name: String,
}

impl SubmissionReceipt {
    pub fn new(store_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            store_name: store_name.into(),
        }
    }

    /// First block of the id, enough to quote back to the user
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("registration rejected: {errors} field(s) failed validation")]
    Rejected { errors: usize },
    #[error(transparent)]
    Revenue(#[from] UnknownRevenueBucket),
    #[error("failed to encode registration: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Receives a registration that already passed client-side validation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionHandler: Send + Sync {
    async fn submit(&mut self, values: FormValues) -> Result<SubmissionReceipt, SubmissionError>;
}
