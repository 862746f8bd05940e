use crate::db::models::NewSurveyResponse;
use crate::error::ValidationError;

use super::vocab;

/// Raw input from the public form, before validation.
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    pub name: Option<String>,
    pub topics: Vec<String>,
    pub description: Option<String>,
    pub podcast_formats: Vec<String>,
    pub suggested_guest: Option<String>,
}

impl SubmissionForm {
    /// Check the form and normalise it into something the store accepts.
    ///
    /// Name is optional. At least one topic and one format must be chosen,
    /// each from its vocabulary. Repeated choices collapse to the first one.
    pub fn validate(self) -> Result<NewSurveyResponse, ValidationError> {
        let topics = dedup(self.topics);
        let podcast_formats = dedup(self.podcast_formats);

        if topics.is_empty() {
            return Err(ValidationError::MissingTopic);
        }
        if let Some(bad) = topics.iter().find(|t| !vocab::is_topic(t)) {
            return Err(ValidationError::UnknownTopic(bad.clone()));
        }
        if podcast_formats.is_empty() {
            return Err(ValidationError::MissingFormat);
        }
        if let Some(bad) = podcast_formats
            .iter()
            .find(|f| !vocab::is_podcast_format(f))
        {
            return Err(ValidationError::UnknownFormat(bad.clone()));
        }

        Ok(NewSurveyResponse {
            name: trimmed(self.name).unwrap_or_default(),
            topics,
            description: trimmed(self.description).unwrap_or_default(),
            podcast_formats,
            suggested_guest: trimmed(self.suggested_guest),
        })
    }
}

fn dedup(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for v in values {
        let v = v.trim().to_string();
        if !v.is_empty() && !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
