use std::collections::HashMap;

use serde::Serialize;

use crate::db::models::SurveyRecord;

/// Occurrence count per category label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsTable {
    counts: HashMap<String, usize>,
}

impl StatsTable {
    /// Count one occurrence per (record, label) pair. A label repeated inside
    /// a single record still counts once for that record.
    pub fn from_sets<'a, I, S>(sets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = &'a String>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for set in sets {
            let mut seen: Vec<&String> = Vec::new();
            for label in set {
                if seen.contains(&label) {
                    continue;
                }
                seen.push(label);
                *counts.entry(label.clone()).or_default() += 1;
            }
        }
        Self { counts }
    }

    #[cfg(test)]
    pub fn get(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries for display: highest count first, ties by label.
    pub fn sorted(&self) -> Vec<StatEntry> {
        let mut entries: Vec<StatEntry> = self
            .counts
            .iter()
            .map(|(label, &count)| StatEntry {
                label: label.clone(),
                count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
        entries
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub label: String,
    pub count: usize,
}

/// One table per category field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub topics: StatsTable,
    pub podcast_formats: StatsTable,
}

/// Recompute both tables from scratch.
pub fn aggregate(records: &[SurveyRecord]) -> Stats {
    Stats {
        topics: StatsTable::from_sets(records.iter().map(|r| &r.topics)),
        podcast_formats: StatsTable::from_sets(records.iter().map(|r| &r.podcast_formats)),
    }
}
