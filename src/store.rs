use async_trait::async_trait;

use crate::db::models::{NewSurveyResponse, SurveyRecord};
use crate::error::StoreError;

/// Access to persisted survey responses.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All responses, newest first.
    async fn list(&self) -> Result<Vec<SurveyRecord>, StoreError>;

    /// Store a new response; the store assigns `id` and `created_at`.
    async fn insert(&self, response: &NewSurveyResponse) -> Result<SurveyRecord, StoreError>;

    /// Remove every listed response. Returns how many rows went away.
    async fn delete_by_ids(&self, ids: &[String]) -> Result<usize, StoreError>;
}
