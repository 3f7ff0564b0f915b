//! Terminal client for the Hacker News story search API.
//!
//! Fetched stories live in a reducer-driven state slot; sorting and the
//! comment total are derived views; the last search term is persisted in
//! a small key-value file.

pub mod api;
pub mod config;
pub mod logging;
pub mod storage;
pub mod stories;
pub mod ui;
