use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{StoreError, SubmissionStore};
use crate::model::{NewSubmission, Submission};

/// In-memory store backend. Stands in for the hosted data service in tests;
/// ids are uuid-assigned and reads come back in creation-descending order
/// like the real collection.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Submission>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Submission>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    pub async fn snapshot(&self) -> Vec<Submission> {
        self.rows.lock().await.clone()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<Submission>, StoreError> {
        let mut rows = self.rows.lock().await.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn insert(&self, fields: NewSubmission) -> Result<Submission, StoreError> {
        let row = Submission {
            id: Uuid::new_v4().to_string(),
            full_name: fields.full_name,
            email: fields.email,
            linkedin_url: fields.linkedin_url,
            portfolio_url: fields.portfolio_url,
            design_focus: fields.design_focus,
            opportunities: fields.opportunities,
            location: fields.location,
            bio: fields.bio,
            created_at: Utc::now(),
            selected_date: None,
        };
        self.rows.lock().await.push(row.clone());
        Ok(row)
    }

    async fn set_selected(
        &self,
        id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Submission, StoreError> {
        let mut rows = self.rows.lock().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        row.selected_date = date;
        Ok(row.clone())
    }

    async fn set_selected_batch(
        &self,
        ids: &[String],
        date: NaiveDate,
    ) -> Result<Vec<Submission>, StoreError> {
        let mut rows = self.rows.lock().await;
        let mut updated = Vec::new();
        for row in rows.iter_mut() {
            if ids.contains(&row.id) {
                row.selected_date = Some(date);
                updated.push(row.clone());
            }
        }
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
