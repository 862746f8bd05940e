//! Derivations the dashboard recomputes from the loaded responses:
//! category counts, the filtered view, the visible page and the
//! set of responses marked for deletion.

pub mod aggregate;
pub mod filter;
pub mod paginate;
pub mod selection;

pub use filter::{CategoryFilter, FilterState};
pub use paginate::Paginator;
pub use selection::SelectionSet;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::db::models::SurveyRecord;

    pub fn record(id: &str, name: &str, topics: &[&str], formats: &[&str]) -> SurveyRecord {
        SurveyRecord {
            id: id.to_string(),
            name: name.to_string(),
            topics: topics.iter().map(|s| s.to_string()).collect(),
            description: String::new(),
            podcast_formats: formats.iter().map(|s| s.to_string()).collect(),
            suggested_guest: None,
            created_at: "2025-01-01T00:00:00.000000Z".to_string(),
        }
    }

    /// `n` records with ids `r1..=rn`, all Technology/Interview.
    pub fn numbered(n: usize) -> Vec<SurveyRecord> {
        (1..=n)
            .map(|i| record(&format!("r{i}"), &format!("Person {i}"), &["Technology"], &["Interview"]))
            .collect()
    }
}
