//! HTTP access to the story search API.

mod client;
mod error;
mod orchestrator;
mod url;

pub use client::StoriesClient;
pub use error::FetchError;
pub use orchestrator::{FetchCompletion, FetchOrchestrator};
pub use url::{search_url, SEARCH_PATH};
