use reqwest::Url;

use super::FetchError;

pub const SEARCH_PATH: &str = "/search";

/// `{base}/search?query={term}&page={page}` with the term form-encoded.
pub fn search_url(base: &str, term: &str, page: u32) -> Result<Url, FetchError> {
    let raw = format!("{}{}", base.trim_end_matches('/'), SEARCH_PATH);
    let mut url = Url::parse(&raw).map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))?;
    url.query_pairs_mut()
        .append_pair("query", term)
        .append_pair("page", &page.to_string());
    Ok(url)
}
