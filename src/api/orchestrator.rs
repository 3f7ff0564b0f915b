use std::sync::mpsc::Sender;

use tokio::runtime::Handle;

use crate::stories::SearchResponse;

use super::{FetchError, StoriesClient};

/// Result of one request, tagged with the generation it was issued under.
#[derive(Debug)]
pub struct FetchCompletion {
    pub generation: u64,
    pub term: String,
    pub page: u32,
    pub outcome: Result<SearchResponse, FetchError>,
}

/// Issues searches and reports their completions back to the UI loop.
///
/// Each request runs as a task on `runtime`; its only effect is one
/// `FetchCompletion` sent through `events`. Requests are numbered so the
/// receiver can tell whether a completion belongs to the newest request.
pub struct FetchOrchestrator<E> {
    client: StoriesClient,
    runtime: Handle,
    events: Sender<E>,
    discard_stale: bool,
    generation: u64,
    last_term: Option<String>,
}

impl<E> FetchOrchestrator<E>
where
    E: From<FetchCompletion> + Send + 'static,
{
    pub fn new(client: StoriesClient, runtime: Handle, events: Sender<E>, discard_stale: bool) -> Self {
        Self {
            client,
            runtime,
            events,
            discard_stale,
            generation: 0,
            last_term: None,
        }
    }

    /// Fetch page 0 of `term` and remember it for `more`.
    pub fn search(&mut self, term: &str) -> u64 {
        self.last_term = Some(term.to_string());
        self.request(term.to_string(), 0)
    }

    /// Fetch the page after `current_page` of the last submitted term.
    ///
    /// Returns `None` if nothing has been searched yet.
    pub fn more(&mut self, current_page: u32) -> Option<u64> {
        let term = self.last_term.clone()?;
        Some(self.request(term, current_page.saturating_add(1)))
    }

    pub fn last_term(&self) -> Option<&str> {
        self.last_term.as_deref()
    }

    pub fn latest_generation(&self) -> u64 {
        self.generation
    }

    /// Whether `completion` should reach the story list.
    pub fn accepts(&self, completion: &FetchCompletion) -> bool {
        !self.discard_stale || completion.generation == self.generation
    }

    fn request(&mut self, term: String, page: u32) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        let client = self.client.clone();
        let events = self.events.clone();

        tracing::info!(term = %term, page, generation, "searching stories");

        self.runtime.spawn(async move {
            let outcome = client.search(&term, page).await;
            if let Err(err) = &outcome {
                tracing::warn!(term = %term, page, generation, kind = err.kind(), "search failed: {}", err);
            }
            let completion = FetchCompletion {
                generation,
                term,
                page,
                outcome,
            };
            if events.send(E::from(completion)).is_err() {
                tracing::trace!(generation, "search completion dropped (receiver gone)");
            }
        });

        generation
    }
}
