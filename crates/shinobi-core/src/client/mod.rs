//! Upstream character API client.
//!
//! [`ApiClient`] talks to the REST service with blocking curl requests and
//! returns normalized data. [`CharacterSource`] is the seam the async
//! listing session depends on, so tests can swap in an in-memory source.

mod http;

use std::sync::Arc;

use serde_json::Value;
use url::Url;

use crate::config::ShinobiConfig;
use crate::error::ApiError;
use crate::model::{Character, PageEnvelope};
use crate::normalize::{normalize_envelope, normalize_single};

pub use http::RequestOptions;

/// Anything that can serve normalized pages and single characters.
///
/// Calls block; async callers go through `spawn_blocking`.
pub trait CharacterSource: Send + Sync + 'static {
    /// Fetches and normalizes page `page` (1-based) of the listing.
    fn fetch_page(&self, page: u32) -> Result<PageEnvelope, ApiError>;

    /// Fetches and normalizes one character, unwrapping `{ character: ... }`.
    fn fetch_character(&self, id: i64) -> Result<Character, ApiError>;
}

/// HTTP client for `{base}/characters` and `{base}/characters/{id}`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    options: RequestOptions,
}

impl ApiClient {
    pub fn new(base_url: &str, options: RequestOptions) -> Result<Self, ApiError> {
        let mut base = Url::parse(base_url)?;
        // Url::join drops the last segment unless the path ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base, options })
    }

    pub fn from_config(cfg: &ShinobiConfig) -> Result<Self, ApiError> {
        Self::new(&cfg.base_url, cfg.request_options())
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `{base}/characters?page={page}`.
    pub fn page_url(&self, page: u32) -> Result<Url, ApiError> {
        let mut url = self.base.join("characters")?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(url)
    }

    /// `{base}/characters/{id}`.
    pub fn character_url(&self, id: i64) -> Result<Url, ApiError> {
        Ok(self.base.join(&format!("characters/{id}"))?)
    }
}

impl CharacterSource for ApiClient {
    fn fetch_page(&self, page: u32) -> Result<PageEnvelope, ApiError> {
        let url = self.page_url(page)?;
        tracing::debug!(%url, page, "fetching character page");
        let resp = http::get(&url, &self.options)?;
        if !resp.is_success() {
            tracing::warn!(page, status = resp.status, "character page request failed");
            return Err(ApiError::transport("characters", resp.status, &resp.body));
        }
        normalize_envelope(&parse_json(&resp.body)?)
    }

    fn fetch_character(&self, id: i64) -> Result<Character, ApiError> {
        let url = self.character_url(id)?;
        tracing::debug!(%url, id, "fetching character");
        let resp = http::get(&url, &self.options)?;
        match resp.status {
            404 => Err(ApiError::NotFound { id }),
            status if !resp.is_success() => {
                tracing::warn!(id, status, "character request failed");
                Err(ApiError::transport(format!("character {id}"), status, &resp.body))
            }
            _ => normalize_single(&parse_json(&resp.body)?),
        }
    }
}

fn parse_json(body: &str) -> Result<Value, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(format!("invalid JSON: {e}")))
}

/// Fetches one character from async code without blocking the runtime.
pub async fn load_character<S: CharacterSource>(source: Arc<S>, id: i64) -> Result<Character, ApiError> {
    tokio::task::spawn_blocking(move || source.fetch_character(id)).await?
}
