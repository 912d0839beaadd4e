//! Search + pagination state for the list pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Characters, episodes and locations share this state machine; pages hold
//! it in an `RwSignal` and drive fetches from a memo of `endpoint()`, so any
//! change to the derived fetch query starts exactly one new request.
//!
//! A 404 on a list query means "no matches" upstream and is shown as an
//! empty page, never as an error.

#[cfg(test)]
#[path = "list_page_test.rs"]
mod list_page_test;

use catalog::{EntityKind, Paginated};

use super::query::{FIRST_PAGE, ListQuery};
use super::request::{FetchRequest, LoadState, RequestGeneration, Ticket};
use crate::net::api::{ApiError, list_endpoint};

#[derive(Clone, Debug)]
pub struct ListPageState<T> {
    pub kind: EntityKind,
    /// Text in the search box, not yet applied.
    pub draft: String,
    /// Filter and page the results reflect.
    pub query: ListQuery,
    pub load: LoadState<Paginated<T>>,
    generation: RequestGeneration,
}

impl<T> ListPageState<T> {
    /// Initial state from the URL query.
    pub fn new(kind: EntityKind, initial: ListQuery) -> Self {
        Self {
            kind,
            draft: initial.name.clone(),
            query: initial,
            load: LoadState::Idle,
            generation: RequestGeneration::default(),
        }
    }

    /// Apply the draft and go back to the first page.
    pub fn submit(&mut self) {
        self.query = ListQuery { name: self.draft.clone(), page: FIRST_PAGE };
    }

    /// Reset draft, filter and page.
    pub fn clear(&mut self) {
        self.draft.clear();
        self.query = ListQuery::default();
    }

    pub fn can_prev(&self) -> bool {
        self.query.page > FIRST_PAGE && self.load.value().is_some_and(Paginated::has_prev)
    }

    pub fn can_next(&self) -> bool {
        self.load.value().is_some_and(Paginated::has_next)
    }

    pub fn prev_page(&mut self) {
        if self.can_prev() {
            self.query.page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.can_next() {
            self.query.page = self.query.page.saturating_add(1);
        }
    }

    /// Whether the Clear control is offered.
    pub fn is_filtered(&self) -> bool {
        !self.query.is_default()
    }

    /// Proxy path for the current query.
    pub fn endpoint(&self) -> String {
        list_endpoint(self.kind, &self.query.api_query())
    }

    /// Enter `loading` and issue a ticket for the current endpoint. Also
    /// used for retry.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.load = LoadState::Loading;
        FetchRequest {
            ticket: self.generation.issue(),
            path: self.endpoint(),
        }
    }

    /// Commit a result if `ticket` is still current. Returns whether it was.
    pub fn finish(&mut self, ticket: Ticket, result: Result<Paginated<T>, ApiError>) -> bool {
        if !self.generation.is_current(ticket) {
            log::debug!("discarding stale {} list response", self.kind);
            return false;
        }
        self.load = match result {
            Ok(page) => LoadState::Success(page),
            Err(e) if e.is_not_found() => LoadState::Success(Paginated::empty()),
            Err(e) => LoadState::Error(e),
        };
        true
    }

    /// Whether a non-empty result grid is on screen; paging controls are
    /// offered only then.
    pub fn has_results(&self) -> bool {
        self.load.value().is_some_and(|page| !page.is_empty())
    }

    /// Number of pages reported by the last result, when known.
    pub fn total_pages(&self) -> Option<u32> {
        self.load.value().map(|page| page.info.pages).filter(|pages| *pages > 0)
    }
}
