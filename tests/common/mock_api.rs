//! Mock search API for exercising the HTTP path.

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;

/// Canned answer for one `(query, page)` pair.
#[derive(Debug, Clone)]
pub struct MockPage {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockPage {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"message": "boom"}"#.to_string(),
            delay_ms: 0,
        }
    }

    pub fn delayed(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

#[derive(Clone, Default)]
struct MockState {
    pages: Arc<Mutex<HashMap<(String, u32), MockPage>>>,
    requests: Arc<Mutex<Vec<(String, u32)>>>,
}

#[derive(Deserialize)]
struct SearchParams {
    query: String,
    page: u32,
}

pub struct MockApi {
    pub addr: SocketAddr,
    state: MockState,
}

impl MockApi {
    /// Binds on an ephemeral port and serves on `runtime`.
    pub fn start(runtime: &Runtime) -> Self {
        let state = MockState::default();
        let router = Router::new()
            .route("/api/v1/search", get(search))
            .with_state(state.clone());

        let listener = runtime
            .block_on(TcpListener::bind("127.0.0.1:0"))
            .expect("bind mock api");
        let addr = listener.local_addr().expect("mock api addr");
        runtime.spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api/v1", self.addr)
    }

    pub fn respond(&self, query: &str, page: u32, response: MockPage) {
        self.state
            .pages
            .lock()
            .unwrap()
            .insert((query.to_string(), page), response);
    }

    /// `(query, page)` of every request received, in arrival order.
    pub fn requests(&self) -> Vec<(String, u32)> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn search(State(state): State<MockState>, Query(params): Query<SearchParams>) -> Response {
    state
        .requests
        .lock()
        .unwrap()
        .push((params.query.clone(), params.page));
    let canned = state
        .pages
        .lock()
        .unwrap()
        .get(&(params.query.clone(), params.page))
        .cloned();

    let Some(page) = canned else {
        let body = format!(r#"{{"hits": [], "page": {}}}"#, params.page);
        return (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body).into_response();
    };

    if page.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(page.delay_ms)).await;
    }
    let status = StatusCode::from_u16(page.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], page.body).into_response()
}
