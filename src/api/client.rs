use crate::config::ApiConfig;
use crate::stories::SearchResponse;

use super::url::search_url;
use super::FetchError;

const USER_AGENT: &str = concat!("hacker-stories/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper over `reqwest::Client` for `GET /search`.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct StoriesClient {
    http: reqwest::Client,
    base_url: String,
}

impl StoriesClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One GET, no retry. Non-2xx statuses are errors.
    pub async fn search(&self, term: &str, page: u32) -> Result<SearchResponse, FetchError> {
        let url = search_url(&self.base_url, term, page)?;
        tracing::debug!(%url, "GET search");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::Network)?;
        Ok(serde_json::from_slice(&body)?)
    }
}
