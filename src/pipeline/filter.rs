use std::fmt;

use serde::Serialize;

use crate::db::models::SurveyRecord;

/// Either no constraint or one exact category value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse user input; `all` (any case) or blank means no constraint.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(input.to_string())
        }
    }

    fn admits(&self, values: &[String]) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => values.iter().any(|v| v == wanted),
        }
    }
}

impl From<Option<String>> for CategoryFilter {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::All, |v| Self::parse(&v))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub topic: CategoryFilter,
    pub podcast_format: CategoryFilter,
    pub search: String,
}

impl FilterState {
    pub fn is_unconstrained(&self) -> bool {
        self.topic == CategoryFilter::All
            && self.podcast_format == CategoryFilter::All
            && self.search.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, record: &SurveyRecord) -> bool {
        self.topic.admits(&record.topics)
            && self.podcast_format.admits(&record.podcast_formats)
            && matches_search(record, &self.search)
    }
}

fn matches_search(record: &SurveyRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    let hit = |haystack: &str| haystack.to_lowercase().contains(&needle);
    hit(&record.name)
        || hit(&record.description)
        || record.suggested_guest.as_deref().is_some_and(hit)
}

/// Records passing every predicate, in source order.
pub fn apply(records: &[SurveyRecord], filter: &FilterState) -> Vec<SurveyRecord> {
    records
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::fixtures::record;

    fn sample() -> Vec<SurveyRecord> {
        let mut a = record("a", "Ada Lovelace", &["Technology", "Science"], &["Interview"]);
        a.description = "Engines and looms".into();
        let mut b = record("b", "", &["Business"], &["Panel Discussion"]);
        b.suggested_guest = Some("Grace HOPPER".into());
        let mut c = record("c", "Charles", &["Technology"], &["Q&A", "Interview"]);
        c.description = "Difference engine episodes".into();
        vec![a, b, c]
    }

    fn ids(records: &[SurveyRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_unconstrained_returns_everything() {
        let records = sample();
        let filter = FilterState::default();
        assert!(filter.is_unconstrained());
        assert_eq!(apply(&records, &filter), records);
    }

    #[test]
    fn test_topic_filter_exact_match() {
        let records = sample();
        let filter = FilterState {
            topic: CategoryFilter::Only("Technology".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &filter)), vec!["a", "c"]);

        let lower = FilterState {
            topic: CategoryFilter::Only("technology".into()),
            ..Default::default()
        };
        assert!(apply(&records, &lower).is_empty());
    }

    #[test]
    fn test_format_filter() {
        let records = sample();
        let filter = FilterState {
            podcast_format: CategoryFilter::Only("Interview".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &filter)), vec!["a", "c"]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let records = sample();
        let by_name = FilterState {
            search: "ADA".into(),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &by_name)), vec!["a"]);

        let by_description = FilterState {
            search: "engine".into(),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &by_description)), vec!["a", "c"]);

        let by_guest = FilterState {
            search: "hopper".into(),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &by_guest)), vec!["b"]);
    }

    #[test]
    fn test_predicates_are_anded() {
        let records = sample();
        let filter = FilterState {
            topic: CategoryFilter::Only("Technology".into()),
            podcast_format: CategoryFilter::Only("Q&A".into()),
            search: "engine".into(),
        };
        assert_eq!(ids(&apply(&records, &filter)), vec!["c"]);

        let none = FilterState {
            topic: CategoryFilter::Only("Business".into()),
            search: "engine".into(),
            ..Default::default()
        };
        assert!(apply(&records, &none).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample();
        let filter = FilterState {
            topic: CategoryFilter::Only("Technology".into()),
            search: "e".into(),
            ..Default::default()
        };
        let once = apply(&records, &filter);
        let twice = apply(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_parse_and_clear() {
        assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("  "), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse(" Science "),
            CategoryFilter::Only("Science".into())
        );
        assert_eq!(CategoryFilter::from(None), CategoryFilter::All);

        let mut filter = FilterState {
            topic: CategoryFilter::Only("Science".into()),
            podcast_format: CategoryFilter::All,
            search: "x".into(),
        };
        filter.clear();
        assert!(filter.is_unconstrained());
    }
}
