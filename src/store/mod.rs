pub mod error;
pub mod memory;
pub mod rest;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use rest::RestStore;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::model::{NewSubmission, Submission};

/// The four logical operations against the portfolio-submissions collection.
///
/// The REST backend talks to the hosted data service; the in-memory backend
/// exists for tests. Every operation returns a tagged `StoreError` rather
/// than propagating transport failures, and nothing is retried.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// All submissions, ordered by creation timestamp descending.
    async fn fetch_all(&self) -> Result<Vec<Submission>, StoreError>;

    /// Create one submission; the store assigns id and timestamp.
    async fn insert(&self, fields: NewSubmission) -> Result<Submission, StoreError>;

    /// Set or clear the selected date on exactly one submission.
    /// `None` clears it.
    async fn set_selected(
        &self,
        id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Submission, StoreError>;

    /// Set the same date on every submission whose id is in `ids`.
    /// Used only for selecting; there is no batch-clear.
    async fn set_selected_batch(
        &self,
        ids: &[String],
        date: NaiveDate,
    ) -> Result<Vec<Submission>, StoreError>;

    /// Permanently remove one submission. No soft-delete, no undo.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
