use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::json;

use super::{StoreError, SubmissionStore};
use crate::config::StoreConfig;
use crate::model::{NewSubmission, Submission};

const COLLECTION: &str = "portfolio_submissions";

/// REST backend for the hosted data service, PostgREST style: one collection
/// endpoint, `id=eq.`/`id=in.(...)` row targeting, representation returned
/// on writes.
///
/// When the endpoint or access key is missing the store is constructed in an
/// unavailable mode where every operation returns `StoreError::Unavailable`
/// instead of panicking or crashing the caller.
pub struct RestStore {
    client: Client,
    endpoint: Option<Endpoint>,
}

struct Endpoint {
    rows_url: String,
    key: String,
}

impl RestStore {
    pub fn from_config(cfg: &StoreConfig) -> Self {
        let endpoint = match (cfg.url.as_deref(), cfg.key.as_deref()) {
            (Some(url), Some(key)) if !url.trim().is_empty() && !key.trim().is_empty() => {
                Some(Endpoint {
                    rows_url: rows_url(url),
                    key: key.to_string(),
                })
            }
            _ => {
                tracing::warn!(
                    "submission store endpoint or key missing; operations will report unavailable"
                );
                None
            }
        };

        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    fn request(&self, method: Method) -> Result<RequestBuilder, StoreError> {
        let ep = self.endpoint.as_ref().ok_or(StoreError::Unavailable)?;
        Ok(self
            .client
            .request(method, &ep.rows_url)
            .header("apikey", &ep.key)
            .bearer_auth(&ep.key))
    }

    async fn send(builder: RequestBuilder) -> Result<Response, StoreError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("submission store request failed: {e}");
            StoreError::Unavailable
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!("submission store rejected request: {status} {body}");
        Err(StoreError::RemoteRejected(format!("{status}: {body}")))
    }

    async fn rows(response: Response) -> Result<Vec<Submission>, StoreError> {
        response
            .json()
            .await
            .map_err(|e| StoreError::RemoteRejected(format!("malformed store response: {e}")))
    }
}

fn rows_url(base: &str) -> String {
    format!("{}/rest/v1/{}", base.trim_end_matches('/'), COLLECTION)
}

fn eq_filter(id: &str) -> String {
    format!("eq.{id}")
}

fn in_filter(ids: &[String]) -> String {
    format!("in.({})", ids.join(","))
}

#[async_trait]
impl SubmissionStore for RestStore {
    async fn fetch_all(&self) -> Result<Vec<Submission>, StoreError> {
        let builder = self
            .request(Method::GET)?
            .query(&[("select", "*"), ("order", "created_at.desc")]);
        Self::rows(Self::send(builder).await?).await
    }

    async fn insert(&self, fields: NewSubmission) -> Result<Submission, StoreError> {
        let builder = self
            .request(Method::POST)?
            .header("Prefer", "return=representation")
            .json(&[fields]);
        Self::rows(Self::send(builder).await?)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::RemoteRejected("insert returned no row".to_string()))
    }

    async fn set_selected(
        &self,
        id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Submission, StoreError> {
        let builder = self
            .request(Method::PATCH)?
            .query(&[("id", eq_filter(id).as_str())])
            .header("Prefer", "return=representation")
            .json(&json!({ "selected_date": date }));
        Self::rows(Self::send(builder).await?)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn set_selected_batch(
        &self,
        ids: &[String],
        date: NaiveDate,
    ) -> Result<Vec<Submission>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let builder = self
            .request(Method::PATCH)?
            .query(&[("id", in_filter(ids).as_str())])
            .header("Prefer", "return=representation")
            .json(&json!({ "selected_date": date }));
        Self::rows(Self::send(builder).await?).await
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let builder = self
            .request(Method::DELETE)?
            .query(&[("id", eq_filter(id).as_str())])
            .header("Prefer", "return=representation");
        let deleted = Self::rows(Self::send(builder).await?).await?;
        if deleted.is_empty() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
