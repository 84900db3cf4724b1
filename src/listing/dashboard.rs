use chrono::{NaiveDate, Utc};
use serde::Serialize;

use super::view::{filter_and_sort, page_of, ViewPage, ViewQuery};
use crate::model::Submission;
use crate::store::{StoreError, SubmissionStore};

/// The admin dashboard's working set: the full collection fetched once from
/// the store, kept consistent by re-applying every mutation locally after
/// the remote call succeeds — never before.
#[derive(Default)]
pub struct Dashboard {
    submissions: Option<Vec<Submission>>,
}

/// Result of committing a random draw: the date written, the entries as
/// committed, and the plain-text block for the clipboard.
#[derive(Debug, Clone, Serialize)]
pub struct DrawCommit {
    pub selected_date: NaiveDate,
    pub copy_text: String,
    pub entries: Vec<Submission>,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.submissions.is_some()
    }

    fn rows(&self) -> &[Submission] {
        self.submissions.as_deref().unwrap_or(&[])
    }

    pub fn get(&self, id: &str) -> Option<&Submission> {
        self.rows().iter().find(|row| row.id == id)
    }

    /// Fetch the full collection on first access; later calls are free.
    pub async fn ensure_loaded(&mut self, store: &dyn SubmissionStore) -> Result<(), StoreError> {
        if self.submissions.is_none() {
            self.submissions = Some(store.fetch_all().await?);
        }
        Ok(())
    }

    /// Unconditionally re-fetch, replacing the cached set.
    pub async fn refresh(&mut self, store: &dyn SubmissionStore) -> Result<usize, StoreError> {
        let rows = store.fetch_all().await?;
        let count = rows.len();
        self.submissions = Some(rows);
        Ok(count)
    }

    pub fn view(&self, query: &ViewQuery) -> ViewPage {
        page_of(self.rows(), query)
    }

    /// Toggle-one action. Checking selects with today's date, unchecking
    /// clears. The local row is touched only after the store confirms;
    /// clearing an already-clear row still succeeds.
    pub async fn set_selected(
        &mut self,
        store: &dyn SubmissionStore,
        id: &str,
        selected: bool,
    ) -> Result<Submission, StoreError> {
        if self.get(id).is_none() {
            return Err(StoreError::NotFound(id.to_string()));
        }

        let date = if selected { Some(today()) } else { None };
        store.set_selected(id, date).await?;

        let mut updated = None;
        if let Some(rows) = self.submissions.as_mut() {
            if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
                row.selected_date = date;
                updated = Some(row.clone());
            }
        }
        updated.ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Random five from the currently filtered-and-sorted view, not the
    /// unfiltered full set.
    pub fn draw(&self, query: &ViewQuery) -> Vec<Submission> {
        let view = filter_and_sort(self.rows(), query);
        super::draw::draw(&view).into_iter().cloned().collect()
    }

    /// Commit-selection action for a finished draw: batch-select the drawn
    /// ids with today's date, mirror the change locally, and produce the
    /// clipboard text. Ids must come from the cached set.
    pub async fn commit_draw(
        &mut self,
        store: &dyn SubmissionStore,
        ids: &[String],
    ) -> Result<DrawCommit, StoreError> {
        let mut entries = Vec::with_capacity(ids.len());
        for id in ids {
            let row = self
                .get(id)
                .cloned()
                .ok_or_else(|| StoreError::NotFound(id.clone()))?;
            entries.push(row);
        }

        let date = today();
        if !ids.is_empty() {
            store.set_selected_batch(ids, date).await?;
        }

        if let Some(rows) = self.submissions.as_mut() {
            for row in rows.iter_mut() {
                if ids.contains(&row.id) {
                    row.selected_date = Some(date);
                }
            }
        }
        for entry in entries.iter_mut() {
            entry.selected_date = Some(date);
        }

        Ok(DrawCommit {
            selected_date: date,
            copy_text: super::draw::selection_summary(&entries),
            entries,
        })
    }

    /// Delete action. The id must exist in the cached set; on store failure
    /// nothing changes locally.
    pub async fn delete(
        &mut self,
        store: &dyn SubmissionStore,
        id: &str,
    ) -> Result<(), StoreError> {
        if self.get(id).is_none() {
            return Err(StoreError::NotFound(id.to_string()));
        }

        store.delete(id).await?;
        if let Some(rows) = self.submissions.as_mut() {
            rows.retain(|row| row.id != id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::view::Tab;
    use crate::store::MemoryStore;
    use crate::testing::{self, FailingStore};

    async fn loaded(store: &MemoryStore) -> Dashboard {
        let mut dash = Dashboard::new();
        dash.ensure_loaded(store).await.unwrap();
        dash
    }

    #[tokio::test]
    async fn loads_once_and_serves_store_order() {
        let store = MemoryStore::with_rows(testing::sample_three());
        let mut dash = loaded(&store).await;

        let page = dash.view(&ViewQuery::default());
        let ids: Vec<&str> = page.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);

        // a second ensure_loaded does not re-fetch
        store
            .insert(testing::new_submission("Newcomer", "new@example.com"))
            .await
            .unwrap();
        dash.ensure_loaded(&store).await.unwrap();
        assert_eq!(dash.view(&ViewQuery::default()).total, 3);

        // refresh does
        dash.refresh(&store).await.unwrap();
        assert_eq!(dash.view(&ViewQuery::default()).total, 4);
    }

    #[tokio::test]
    async fn toggle_moves_rows_between_partitions() {
        let store = MemoryStore::with_rows(testing::sample_three());
        let mut dash = loaded(&store).await;

        let updated = dash.set_selected(&store, "b", true).await.unwrap();
        assert!(updated.is_selected());

        let new_tab = dash.view(&ViewQuery {
            tab: Tab::New,
            ..Default::default()
        });
        let selected_tab = dash.view(&ViewQuery {
            tab: Tab::Selected,
            ..Default::default()
        });
        assert_eq!(new_tab.total, 2);
        assert_eq!(selected_tab.total, 1);
        assert_eq!(selected_tab.rows[0].id, "b");

        // and the store saw it
        let remote = store.fetch_all().await.unwrap();
        assert!(remote.iter().find(|r| r.id == "b").unwrap().is_selected());

        let updated = dash.set_selected(&store, "b", false).await.unwrap();
        assert!(!updated.is_selected());
        assert_eq!(
            dash.view(&ViewQuery {
                tab: Tab::Selected,
                ..Default::default()
            })
            .total,
            0
        );
    }

    #[tokio::test]
    async fn clearing_an_unselected_row_is_a_successful_no_op() {
        let store = MemoryStore::with_rows(testing::sample_three());
        let mut dash = loaded(&store).await;

        let before = dash.view(&ViewQuery::default()).counts;
        let updated = dash.set_selected(&store, "c", false).await.unwrap();
        assert!(!updated.is_selected());
        assert_eq!(dash.view(&ViewQuery::default()).counts, before);
    }

    #[tokio::test]
    async fn failed_toggle_leaves_local_state_untouched() {
        let store = MemoryStore::with_rows(testing::sample_three());
        let mut dash = loaded(&store).await;

        let err = dash
            .set_selected(&FailingStore::rejecting(), "a", true)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::RemoteRejected(_)));
        assert!(!dash.get("a").unwrap().is_selected());
    }

    #[tokio::test]
    async fn toggling_an_unknown_id_never_reaches_the_store() {
        let store = MemoryStore::with_rows(testing::sample_three());
        let mut dash = loaded(&store).await;

        // FailingStore would error loudly if called; NotFound wins first
        let err = dash
            .set_selected(&FailingStore::rejecting(), "ghost", true)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn draw_respects_the_filtered_view() {
        let store = MemoryStore::with_rows(testing::sample_three());
        let dash = loaded(&store).await;

        let picks = dash.draw(&ViewQuery {
            search: "am".to_string(),
            ..Default::default()
        });
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].id, "b");
    }

    #[tokio::test]
    async fn commit_draw_selects_and_formats_the_summary() {
        let store = MemoryStore::with_rows(testing::sample_three());
        let mut dash = loaded(&store).await;

        let ids = vec!["b".to_string(), "a".to_string()];
        let commit = dash.commit_draw(&store, &ids).await.unwrap();

        assert_eq!(commit.entries.len(), 2);
        assert!(commit.copy_text.starts_with("1. Amy\n"));
        assert!(commit.copy_text.contains("\n\n2. Zoe\n"));
        assert!(commit.entries.iter().all(|e| e.is_selected()));

        let selected_tab = dash.view(&ViewQuery {
            tab: Tab::Selected,
            ..Default::default()
        });
        assert_eq!(selected_tab.total, 2);

        let remote = store.fetch_all().await.unwrap();
        assert!(remote.iter().find(|r| r.id == "a").unwrap().is_selected());
        assert!(remote.iter().find(|r| r.id == "b").unwrap().is_selected());
        assert!(!remote.iter().find(|r| r.id == "c").unwrap().is_selected());
    }

    #[tokio::test]
    async fn failed_commit_changes_nothing_locally() {
        let store = MemoryStore::with_rows(testing::sample_three());
        let mut dash = loaded(&store).await;

        let err = dash
            .commit_draw(&FailingStore::unavailable(), &["a".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unavailable));
        assert!(!dash.get("a").unwrap().is_selected());
    }

    #[tokio::test]
    async fn delete_removes_everywhere_and_unknown_ids_fail() {
        let store = MemoryStore::with_rows(testing::sample_three());
        let mut dash = loaded(&store).await;

        dash.delete(&store, "c").await.unwrap();
        assert!(dash.get("c").is_none());
        assert_eq!(dash.view(&ViewQuery::default()).total, 2);
        assert_eq!(store.snapshot().await.len(), 2);

        let err = dash.delete(&store, "c").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn failed_delete_keeps_the_row() {
        let store = MemoryStore::with_rows(testing::sample_three());
        let mut dash = loaded(&store).await;

        let err = dash
            .delete(&FailingStore::rejecting(), "a")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::RemoteRejected(_)));
        assert!(dash.get("a").is_some());
        assert_eq!(dash.view(&ViewQuery::default()).total, 3);
    }
}
