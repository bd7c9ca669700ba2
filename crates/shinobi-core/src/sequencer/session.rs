//! Async driver that pairs a [`Paginator`] with a [`CharacterSource`].
//!
//! At most one page request is in flight: every fetching method takes
//! `&mut self` and the paginator refuses overlapping requests. A
//! [`SessionHandle`] lets another task tear the session down; a completion
//! that lands after teardown is dropped without touching the accumulator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::paginator::{Completion, PageRequest, Paginator};
use crate::client::CharacterSource;
use crate::error::ApiError;
use crate::filter::{self, FilterTag};
use crate::model::Character;

/// Shared teardown token for a [`ListingSession`].
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    closed: Arc<AtomicBool>,
}

impl SessionHandle {
    /// Request teardown. Results of the request in flight will be discarded.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

pub struct ListingSession<S: CharacterSource> {
    source: Arc<S>,
    paginator: Paginator,
    handle: SessionHandle,
}

impl<S: CharacterSource> ListingSession<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            paginator: Paginator::new(),
            handle: SessionHandle::default(),
        }
    }

    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn records(&self) -> impl Iterator<Item = &Character> + '_ {
        self.paginator.records()
    }

    /// Accumulated records matching `tag`. Never triggers a fetch.
    pub fn filtered(&self, tag: FilterTag) -> Vec<&Character> {
        filter::apply(self.paginator.records(), tag)
    }

    /// Tears the session down from the owning task. A request abandoned
    /// mid-flight can no longer touch the accumulator.
    pub fn close(&mut self) {
        self.handle.close();
        self.paginator.close();
    }

    /// Loads page 1. `Ok(None)` when the session already started.
    pub async fn start(&mut self) -> Result<Option<Completion>, ApiError> {
        let request = self.paginator.start();
        self.run(request).await
    }

    /// Viewport signal. `Ok(None)` when no page was requested (no more
    /// pages, a request in flight, failed state, or closed).
    pub async fn on_viewport_visible(&mut self) -> Result<Option<Completion>, ApiError> {
        let request = self.paginator.on_viewport_visible();
        self.run(request).await
    }

    /// Re-requests the page that failed last.
    pub async fn retry(&mut self) -> Result<Option<Completion>, ApiError> {
        let request = self.paginator.retry();
        self.run(request).await
    }

    /// Drops accumulated pages and loads page 1 again.
    pub async fn restart(&mut self) -> Result<Option<Completion>, ApiError> {
        let request = self.paginator.restart();
        self.run(request).await
    }

    async fn run(&mut self, request: Option<PageRequest>) -> Result<Option<Completion>, ApiError> {
        if self.handle.is_closed() {
            self.paginator.close();
            return Ok(None);
        }
        let Some(request) = request else {
            return Ok(None);
        };

        let source = Arc::clone(&self.source);
        let page = request.page();
        let outcome = tokio::task::spawn_blocking(move || source.fetch_page(page))
            .await
            .unwrap_or_else(|e| Err(ApiError::from(e)));

        if self.handle.is_closed() {
            self.paginator.close();
        }
        match outcome {
            Ok(envelope) => Ok(Some(self.paginator.on_page_loaded(request, envelope))),
            Err(err) => match self.paginator.on_page_failed(request, &err) {
                Completion::Applied => Err(err),
                Completion::Discarded => Ok(Some(Completion::Discarded)),
            },
        }
    }
}
