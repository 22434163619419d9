use std::collections::BTreeMap;
use std::fmt;

use crate::view_model::{AppViewModel, JobCardView};

/// Identifies one (query, page) fetch round. Every accepted input change
/// starts a new generation; completion events carry the generation they
/// belong to and stale ones are dropped by `update`.
pub type Generation = u64;

/// Search filters keyed by upstream query-parameter name.
///
/// Keys and values pass through to the request untouched. Equality is
/// structural, so setting a field to the value it already has is not a
/// change of search intent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    fields: BTreeMap<String, String>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the query with `name` set to `value`.
    pub fn with_field(&self, name: &str, value: &str) -> Self {
        let mut fields = self.fields.clone();
        fields.insert(name.to_string(), value.to_string());
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Field pairs in key order, ready to append to a request.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One job listing as delivered by the upstream API. Only `id` is
/// interpreted (stable identity for list rendering); the rest is carried
/// through to presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub location: Option<String>,
    pub kind: Option<String>,
    pub url: Option<String>,
    pub created_at: Option<String>,
    pub description: Option<String>,
    pub how_to_apply: Option<String>,
}

/// Failure info surfaced by a fetch round. The engine keeps a structured
/// error; by the time it reaches the state machine only the message is
/// left, and the UI renders an even more generic line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub message: String,
}

impl FetchFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Outcome of the current fetch generation.
///
/// Invariant: `loading == true` implies `jobs` is empty and `error` unset.
/// All four fields are reset when a generation starts; afterwards each
/// completion event mutates its own slice of the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchState {
    pub jobs: Vec<Job>,
    pub loading: bool,
    pub error: Option<FetchFailure>,
    pub has_next_page: Option<bool>,
}

impl FetchState {
    fn started() -> Self {
        Self {
            jobs: Vec::new(),
            loading: true,
            error: None,
            has_next_page: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    query: SearchQuery,
    page: u32,
    generation: Generation,
    fetch: FetchState,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            query: SearchQuery::new(),
            page: 1,
            generation: 0,
            fetch: FetchState::started(),
            dirty: true,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn fetch(&self) -> &FetchState {
        &self.fetch
    }

    /// Replaces the query and resets the page to 1.
    pub(crate) fn set_query(&mut self, query: SearchQuery) {
        self.query = query;
        self.page = 1;
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// Starts a new fetch generation: bumps the counter and resets the
    /// fetch state before any response can arrive.
    pub(crate) fn begin_generation(&mut self) -> Generation {
        self.generation += 1;
        self.fetch = FetchState::started();
        self.mark_dirty();
        self.generation
    }

    pub(crate) fn apply_jobs(&mut self, jobs: Vec<Job>) {
        self.fetch.loading = false;
        self.fetch.jobs = jobs;
        self.mark_dirty();
    }

    pub(crate) fn apply_probe(&mut self, has_next: bool) {
        self.fetch.has_next_page = Some(has_next);
        self.mark_dirty();
    }

    /// Collapses the generation to its error outcome. `has_next_page` is
    /// deliberately left as-is; see the probe notes in DESIGN.md.
    pub(crate) fn apply_failure(&mut self, failure: FetchFailure) {
        self.fetch.loading = false;
        self.fetch.error = Some(failure);
        self.fetch.jobs.clear();
        self.mark_dirty();
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            page: self.page,
            loading: self.fetch.loading,
            error: self.fetch.error.as_ref().map(|failure| failure.to_string()),
            has_next_page: self.fetch.has_next_page,
            prev_enabled: self.page > 1,
            next_enabled: self.fetch.has_next_page == Some(true),
            job_count: self.fetch.jobs.len(),
            jobs: self.fetch.jobs.iter().map(JobCardView::from_job).collect(),
            dirty: self.dirty,
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
