//! Dashboard state and the transitions user input drives through it.
//!
//! Every mutation ends by explicitly re-running the derivations it affects:
//! record changes re-aggregate and re-filter, filter changes re-filter, and
//! any re-filter sends the paginator back to page one.

use std::sync::Arc;

use crate::config::ITEMS_PER_PAGE;
use crate::db::models::SurveyRecord;
use crate::error::AppError;
use crate::identity::{IdentityProvider, Session};
use crate::pipeline::aggregate::{self, Stats};
use crate::pipeline::filter::{self, CategoryFilter, FilterState};
use crate::pipeline::{Paginator, SelectionSet};
use crate::store::RecordStore;
use crate::theme::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No session; the caller should send the user to the login flow.
    Redirect,
    Loaded,
}

pub struct Dashboard {
    store: Arc<dyn RecordStore>,
    identity: Arc<dyn IdentityProvider>,
    theme: ThemeMode,
    session: Option<Session>,
    records: Vec<SurveyRecord>,
    filtered: Vec<SurveyRecord>,
    stats: Stats,
    filter: FilterState,
    paginator: Paginator,
    selection: SelectionSet,
    loading: bool,
    load_error: Option<String>,
}

impl Dashboard {
    pub fn new(
        store: Arc<dyn RecordStore>,
        identity: Arc<dyn IdentityProvider>,
        theme: ThemeMode,
    ) -> Self {
        Self {
            store,
            identity,
            theme,
            session: None,
            records: Vec::new(),
            filtered: Vec::new(),
            stats: Stats::default(),
            filter: FilterState::default(),
            paginator: Paginator::new(ITEMS_PER_PAGE),
            selection: SelectionSet::default(),
            loading: true,
            load_error: None,
        }
    }

    /// Check the session, then fetch every response.
    ///
    /// A failed fetch is not returned as an error: it leaves the dashboard
    /// empty with `load_error` set so the view can show it.
    pub async fn load(&mut self) -> Result<LoadOutcome, AppError> {
        let Some(session) = self.identity.get_session().await? else {
            tracing::info!("No active session, redirecting to login");
            return Ok(LoadOutcome::Redirect);
        };
        self.session = Some(session);

        match self.store.list().await {
            Ok(records) => {
                tracing::info!("Loaded {} survey response(s)", records.len());
                self.records = records;
                self.load_error = None;
            }
            Err(e) => {
                tracing::error!("Failed to load survey responses: {e}");
                self.records.clear();
                self.load_error = Some(e.to_string());
            }
        }
        self.loading = false;
        self.records_changed();
        Ok(LoadOutcome::Loaded)
    }

    // --- Filters ---

    pub fn set_topic_filter(&mut self, topic: CategoryFilter) {
        self.filter.topic = topic;
        self.refilter();
    }

    pub fn set_format_filter(&mut self, format: CategoryFilter) {
        self.filter.podcast_format = format;
        self.refilter();
    }

    pub fn set_search(&mut self, term: &str) {
        self.filter.search = term.to_string();
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.refilter();
    }

    // --- Paging ---

    pub fn go_to_page(&mut self, page: i64) {
        self.paginator.go_to_page(page);
    }

    pub fn first_page(&mut self) {
        self.paginator.first();
    }

    pub fn previous_page(&mut self) {
        self.paginator.previous();
    }

    pub fn next_page(&mut self) {
        self.paginator.next();
    }

    pub fn last_page(&mut self) {
        self.paginator.last();
    }

    // --- Selection ---

    pub fn mark(&mut self, id: &str) {
        self.selection.mark(id);
    }

    pub fn unmark(&mut self, id: &str) {
        self.selection.unmark(id);
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        self.selection.toggle(id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Delete every marked response. Local state only changes once the
    /// store confirms; on failure nothing is touched.
    pub async fn bulk_delete(&mut self) -> Result<usize, AppError> {
        if self.selection.is_empty() {
            return Err(AppError::NothingSelected);
        }
        let ids = self.selection.ids();

        let removed = match self.store.delete_by_ids(&ids).await {
            Ok(n) => n,
            Err(e) => {
                tracing::error!("Bulk delete of {} response(s) failed: {e}", ids.len());
                return Err(e.into());
            }
        };

        tracing::info!("Deleted {removed} of {} selected response(s)", ids.len());
        self.records.retain(|r| !ids.contains(&r.id));
        self.selection.remove_all(&ids);
        self.records_changed();
        Ok(removed)
    }

    /// End the session and drop everything loaded under it.
    pub async fn logout(&mut self) -> Result<(), AppError> {
        self.identity.sign_out().await?;
        let theme = self.theme;
        *self = Self::new(self.store.clone(), self.identity.clone(), theme);
        Ok(())
    }

    // --- Derivations ---

    fn records_changed(&mut self) {
        self.stats = aggregate::aggregate(&self.records);
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = filter::apply(&self.records, &self.filter);
        self.paginator.reset(self.filtered.len());
    }

    // --- Read access ---

    pub fn records(&self) -> &[SurveyRecord] {
        &self.records
    }

    pub fn filtered(&self) -> &[SurveyRecord] {
        &self.filtered
    }

    pub fn page(&self) -> &[SurveyRecord] {
        self.paginator.slice(&self.filtered)
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}
