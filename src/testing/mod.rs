use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{NewSubmission, Submission};
use crate::store::{StoreError, SubmissionStore};

/// Build a submission for the given calendar day with sensible defaults.
pub fn submission(id: &str, name: &str, created: &str) -> Submission {
    let created_at: DateTime<Utc> = format!("{created}T12:00:00Z")
        .parse()
        .expect("valid test timestamp");
    Submission {
        id: id.to_string(),
        full_name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        linkedin_url: None,
        portfolio_url: format!("https://{}.example", name.to_lowercase()),
        design_focus: "web".to_string(),
        opportunities: "freelance".to_string(),
        location: Some("Remote".to_string()),
        bio: None,
        created_at,
        selected_date: None,
    }
}

/// The three-submission fixture the listing scenarios are written against,
/// in the order the store delivers it (creation-descending).
pub fn sample_three() -> Vec<Submission> {
    vec![
        submission("a", "Zoe", "2024-01-03"),
        submission("b", "Amy", "2024-01-02"),
        submission("c", "Mo", "2024-01-01"),
    ]
}

/// `count` submissions spread across distinct days, newest first.
pub fn many(count: usize) -> Vec<Submission> {
    (0..count)
        .map(|i| {
            let day = NaiveDate::from_ymd_opt(2023, 1, 1)
                .expect("valid base date")
                + chrono::Days::new((count - i) as u64);
            submission(&format!("id-{i}"), &format!("Person {i:03}"), &day.to_string())
        })
        .collect()
}

pub fn new_submission(name: &str, email: &str) -> NewSubmission {
    NewSubmission {
        full_name: name.to_string(),
        email: email.to_string(),
        linkedin_url: None,
        portfolio_url: format!("https://{}.example", name.to_lowercase()),
        design_focus: "web".to_string(),
        opportunities: "freelance".to_string(),
        location: None,
        bio: None,
    }
}

/// Store double whose every operation fails with one configured error.
pub struct FailingStore {
    error: StoreError,
}

impl FailingStore {
    pub fn unavailable() -> Self {
        Self {
            error: StoreError::Unavailable,
        }
    }

    pub fn rejecting() -> Self {
        Self {
            error: StoreError::RemoteRejected("simulated rejection".to_string()),
        }
    }
}

#[async_trait]
impl SubmissionStore for FailingStore {
    async fn fetch_all(&self) -> Result<Vec<Submission>, StoreError> {
        Err(self.error.clone())
    }

    async fn insert(&self, _fields: NewSubmission) -> Result<Submission, StoreError> {
        Err(self.error.clone())
    }

    async fn set_selected(
        &self,
        _id: &str,
        _date: Option<NaiveDate>,
    ) -> Result<Submission, StoreError> {
        Err(self.error.clone())
    }

    async fn set_selected_batch(
        &self,
        _ids: &[String],
        _date: NaiveDate,
    ) -> Result<Vec<Submission>, StoreError> {
        Err(self.error.clone())
    }

    async fn delete(&self, _id: &str) -> Result<(), StoreError> {
        Err(self.error.clone())
    }
}
