//! Pagination state machine for a viewport-driven ("infinite scroll") consumer.
//!
//! The paginator performs no I/O. It hands out [`PageRequest`]s and is told
//! about their outcome; the caller does the fetching. Each request carries
//! the session generation it was issued in, so completions that arrive after
//! a reset or teardown are recognized and dropped.

use crate::error::ApiError;
use crate::model::{Character, PageEnvelope};

/// Page number a fresh sequence starts from.
pub const FIRST_PAGE: u32 = 1;

/// A page fetch the caller should perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    generation: u64,
}

impl PageRequest {
    pub fn page(&self) -> u32 {
        self.page
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequencerState {
    /// Nothing requested yet (fresh or after reset).
    Initial,
    Loading { page: u32 },
    Idle,
    /// Last request failed; only an explicit retry re-requests the page.
    Failed { page: u32, message: String },
    /// Consumer torn down; every later completion is discarded.
    Closed,
}

/// Whether a completion was applied to the accumulator.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// Stale (older generation, unexpected page) or arrived after close.
    Discarded,
}

#[derive(Debug, Clone)]
pub struct Paginator {
    accumulated_pages: Vec<PageEnvelope>,
    current_request_page: u32,
    has_more: bool,
    is_fetching_next: bool,
    state: SequencerState,
    generation: u64,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    pub fn new() -> Self {
        Self {
            accumulated_pages: Vec::new(),
            current_request_page: FIRST_PAGE,
            has_more: false,
            is_fetching_next: false,
            state: SequencerState::Initial,
            generation: 0,
        }
    }

    /// First subscription: `initial -> loading(1)`. `None` in any other state.
    pub fn start(&mut self) -> Option<PageRequest> {
        if self.state != SequencerState::Initial {
            return None;
        }
        self.current_request_page = FIRST_PAGE;
        Some(self.begin(FIRST_PAGE))
    }

    /// Viewport reached the end of the list: `idle -> loading(N+1)`, N being
    /// the last requested page, when more pages exist and nothing is in flight.
    pub fn on_viewport_visible(&mut self) -> Option<PageRequest> {
        if self.state != SequencerState::Idle || !self.has_more || self.is_fetching_next {
            return None;
        }
        let next = self.current_request_page.checked_add(1)?;
        self.current_request_page = next;
        Some(self.begin(next))
    }

    /// Manual re-trigger after a failure; re-requests the failed page.
    pub fn retry(&mut self) -> Option<PageRequest> {
        match self.state {
            SequencerState::Failed { page, .. } => Some(self.begin(page)),
            _ => None,
        }
    }

    /// Drops everything and returns to `initial` (e.g. filter reset).
    /// In-flight completions from before the reset will be discarded.
    pub fn reset(&mut self) {
        if self.state == SequencerState::Closed {
            return;
        }
        self.generation += 1;
        self.accumulated_pages.clear();
        self.current_request_page = FIRST_PAGE;
        self.has_more = false;
        self.is_fetching_next = false;
        self.state = SequencerState::Initial;
    }

    /// [`reset`](Self::reset) followed by [`start`](Self::start).
    pub fn restart(&mut self) -> Option<PageRequest> {
        self.reset();
        self.start()
    }

    /// Consumer teardown. Terminal.
    pub fn close(&mut self) {
        self.generation += 1;
        self.is_fetching_next = false;
        self.state = SequencerState::Closed;
    }

    pub fn on_page_loaded(&mut self, request: PageRequest, envelope: PageEnvelope) -> Completion {
        if !self.is_current(request) {
            tracing::debug!(page = request.page, "discarding stale page completion");
            return Completion::Discarded;
        }
        // Upstream may omit or repeat the page number; the request page bounds it.
        self.has_more = envelope.has_next_page() && request.page < envelope.total_pages;
        tracing::debug!(
            page = request.page,
            current_page = envelope.current_page,
            total_pages = envelope.total_pages,
            records = envelope.results.len(),
            has_more = self.has_more,
            "page loaded"
        );
        self.accumulated_pages.push(envelope);
        self.is_fetching_next = false;
        self.state = SequencerState::Idle;
        Completion::Applied
    }

    /// The failed page contributes nothing; `has_more` is left as it was.
    pub fn on_page_failed(&mut self, request: PageRequest, error: &ApiError) -> Completion {
        if !self.is_current(request) {
            tracing::debug!(page = request.page, "discarding stale page failure");
            return Completion::Discarded;
        }
        tracing::warn!(page = request.page, error = %error, "page request failed");
        self.is_fetching_next = false;
        self.state = SequencerState::Failed {
            page: request.page,
            message: error.to_string(),
        };
        Completion::Applied
    }

    pub fn state(&self) -> &SequencerState {
        &self.state
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_fetching_next(&self) -> bool {
        self.is_fetching_next
    }

    pub fn current_request_page(&self) -> u32 {
        self.current_request_page
    }

    pub fn is_closed(&self) -> bool {
        self.state == SequencerState::Closed
    }

    /// Message of the last failure, while in the failed state.
    pub fn last_error(&self) -> Option<&str> {
        match &self.state {
            SequencerState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn pages(&self) -> &[PageEnvelope] {
        &self.accumulated_pages
    }

    /// All records across pages, in page-fetch order.
    pub fn records(&self) -> impl Iterator<Item = &Character> + '_ {
        self.accumulated_pages.iter().flat_map(|p| p.results.iter())
    }

    fn begin(&mut self, page: u32) -> PageRequest {
        self.is_fetching_next = true;
        self.state = SequencerState::Loading { page };
        PageRequest {
            page,
            generation: self.generation,
        }
    }

    fn is_current(&self, request: PageRequest) -> bool {
        request.generation == self.generation
            && self.state == SequencerState::Loading { page: request.page }
    }
}
