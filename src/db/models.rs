use serde::{Deserialize, Serialize};

/// One submitted survey response as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub id: String,
    pub name: String,
    pub topics: Vec<String>,
    pub description: String,
    pub podcast_formats: Vec<String>,
    pub suggested_guest: Option<String>,
    pub created_at: String,
}

impl SurveyRecord {
    /// Name as shown on the dashboard; blank submissions read as "Anonymous".
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Anonymous"
        } else {
            &self.name
        }
    }
}

/// A validated submission, before the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSurveyResponse {
    pub name: String,
    pub topics: Vec<String>,
    pub description: String,
    pub podcast_formats: Vec<String>,
    pub suggested_guest: Option<String>,
}
