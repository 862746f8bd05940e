pub mod html;
pub mod json;
pub mod terminal;

use serde::Serialize;

use crate::dashboard::Dashboard;
use crate::db::models::SurveyRecord;
use crate::pipeline::{CategoryFilter, FilterState};
use crate::pipeline::aggregate::StatEntry;
use crate::theme::{Palette, ThemeMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Terminal,
    Json,
    Html,
}

impl ReportFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            "html" => Self::Html,
            _ => Self::Terminal,
        }
    }
}

/// A rendered-ready snapshot of what the dashboard currently shows.
#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub theme: ThemeMode,
    #[serde(skip)]
    pub palette: Palette,
    pub loading: bool,
    pub load_error: Option<String>,
    pub filter: FilterState,
    pub summary: ReportSummary,
    pub topic_stats: Vec<StatEntry>,
    pub format_stats: Vec<StatEntry>,
    pub rows: Vec<ReportRow>,
    pub selected: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub total_responses: usize,
    pub filtered_responses: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
    pub selected: usize,
    pub topic_mentions: usize,
}

#[derive(Debug, Serialize)]
pub struct ReportRow {
    pub selected: bool,
    #[serde(flatten)]
    pub record: SurveyRecord,
}

impl Report {
    pub fn build(dashboard: &Dashboard) -> Self {
        let pager = dashboard.paginator();
        let selection = dashboard.selection();

        let rows = dashboard
            .page()
            .iter()
            .map(|r| ReportRow {
                selected: selection.contains(&r.id),
                record: r.clone(),
            })
            .collect();

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            theme: dashboard.theme(),
            palette: dashboard.theme().palette(),
            loading: dashboard.is_loading(),
            load_error: dashboard.load_error().map(str::to_string),
            filter: dashboard.filter().clone(),
            summary: ReportSummary {
                total_responses: dashboard.records().len(),
                filtered_responses: pager.total_items(),
                current_page: pager.current_page(),
                total_pages: pager.total_pages(),
                items_per_page: pager.items_per_page(),
                selected: selection.len(),
                topic_mentions: dashboard.stats().topics.total(),
            },
            topic_stats: dashboard.stats().topics.sorted(),
            format_stats: dashboard.stats().podcast_formats.sorted(),
            rows,
            selected: selection.ids(),
        }
    }

    pub fn render(&self, format: ReportFormat) -> anyhow::Result<String> {
        match format {
            ReportFormat::Terminal => terminal::render(self),
            ReportFormat::Json => json::render(self),
            ReportFormat::Html => html::render(self),
        }
    }

    /// One-line description of the active filters.
    pub fn filter_summary(&self) -> String {
        if self.filter.is_unconstrained() {
            return "none".to_string();
        }
        let mut parts = Vec::new();
        if let CategoryFilter::Only(t) = &self.filter.topic {
            parts.push(format!("topic = {t}"));
        }
        if let CategoryFilter::Only(f) = &self.filter.podcast_format {
            parts.push(format!("format = {f}"));
        }
        if !self.filter.search.is_empty() {
            parts.push(format!("search = \"{}\"", self.filter.search));
        }
        parts.join(", ")
    }
}

pub(crate) fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}
