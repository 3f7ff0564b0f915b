//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use hacker_stories::api::{FetchCompletion, FetchOrchestrator, StoriesClient};
use hacker_stories::config::ApiConfig;
use hacker_stories::storage::{KeyValueStore, MemoryStore, PersistedValue, StorageError, SEARCH_KEY};
use hacker_stories::stories::Story;
use hacker_stories::ui::app::App;
use hacker_stories::ui::events::AppEvent;
use serde_json::json;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use tokio::runtime::Runtime;

/// Address nothing listens on; requests fail fast with a connect error.
pub const DEAD_API: &str = "http://127.0.0.1:1/api/v1";

pub fn story(id: &str, num_comments: u64) -> Story {
    Story {
        object_id: id.to_string(),
        title: format!("Story {id}"),
        url: format!("https://example.com/{id}"),
        author: format!("author{id}"),
        num_comments,
        points: 10,
    }
}

/// JSON body as the search API would send it.
pub fn page_body(stories: &[Story], page: u32) -> String {
    let hits: Vec<_> = stories
        .iter()
        .map(|s| {
            json!({
                "objectID": s.object_id,
                "title": s.title,
                "url": s.url,
                "author": s.author,
                "num_comments": s.num_comments,
                "points": s.points,
            })
        })
        .collect();
    json!({ "hits": hits, "page": page, "nbPages": 50 }).to_string()
}

pub fn runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("test runtime")
}

pub fn api_config(base_url: &str, discard_stale: bool) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        discard_stale_responses: discard_stale,
    }
}

/// Store that reads fine but rejects every write.
pub struct FailingStore {
    entries: MemoryStore,
}

impl FailingStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        Self {
            entries: MemoryStore::with_entry(key, value),
        }
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            path: "storage.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

// -- App harness --------------------------------------------------------------

/// An `App` wired to a real orchestrator whose completions land in `events`.
pub struct Harness {
    pub app: App,
    pub events: Receiver<AppEvent>,
}

impl Harness {
    pub fn new(runtime: &Runtime, base_url: &str, store: Box<dyn KeyValueStore>) -> Self {
        Self::with_policy(runtime, base_url, store, true)
    }

    pub fn with_policy(
        runtime: &Runtime,
        base_url: &str,
        store: Box<dyn KeyValueStore>,
        discard_stale: bool,
    ) -> Self {
        let client = StoriesClient::new(&api_config(base_url, discard_stale)).expect("client");
        let (tx, rx) = mpsc::channel();
        let fetcher = FetchOrchestrator::new(client, runtime.handle().clone(), tx, discard_stale);
        let term = PersistedValue::hydrate(store, SEARCH_KEY, "React");
        Self {
            app: App::new(term, fetcher),
            events: rx,
        }
    }

    pub fn offline(runtime: &Runtime) -> Self {
        Self::new(runtime, DEAD_API, Box::new(MemoryStore::new()))
    }

    pub fn next_completion(&self) -> FetchCompletion {
        match self.events.recv_timeout(Duration::from_secs(10)) {
            Ok(AppEvent::StoriesFetched(completion)) => completion,
            Ok(_) => panic!("unexpected non-fetch event"),
            Err(err) => panic!("no fetch completion: {err}"),
        }
    }

    /// Waits for one completion and feeds it to the app.
    pub fn pump(&mut self) {
        let completion = self.next_completion();
        self.app.on_fetch_completed(completion);
    }
}
