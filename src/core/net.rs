// src/core/net.rs
// HTTP GET for the static feeds (reqwest, async)

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, REFERER, USER_AGENT};

use crate::config::consts::{FEED_ACCEPT, FEED_REFERER, FEED_TIMEOUT, FEED_USER_AGENT};
use crate::error::{HarvestError, Result};

/// Client with a desktop-browser header set. The feed hosts reject the
/// default reqwest user agent.
pub fn client() -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(FEED_USER_AGENT));
    headers.insert(REFERER, HeaderValue::from_static(FEED_REFERER));
    headers.insert(ACCEPT, HeaderValue::from_static(FEED_ACCEPT));

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(FEED_TIMEOUT)
        .build()
        .map_err(|source| HarvestError::Fetch { url: s!("<client>"), source })
}

/// GET `url` and return the body. Non-2xx statuses and timeouts are errors.
pub async fn http_get(client: &reqwest::Client, url: &str) -> Result<String> {
    let fetch_err = |source| HarvestError::Fetch { url: s!(url), source };

    let resp = client
        .get(url)
        .send()
        .await
        .map_err(fetch_err)?
        .error_for_status()
        .map_err(fetch_err)?;
    let body = resp.text().await.map_err(fetch_err)?;

    log::info!("GET {url}: {:.1} KB", body.len() as f64 / 1024.0);
    Ok(body)
}
