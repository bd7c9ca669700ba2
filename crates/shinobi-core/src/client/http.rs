//! Blocking HTTP GET via the curl crate (libcurl).

use std::time::Duration;

use url::Url;

use crate::error::ApiError;

/// Per-request transport settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
            user_agent: None,
        }
    }
}

/// Status and body of a completed GET.
#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub status: u32,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a GET and collects the whole body. Follows redirects.
///
/// Non-2xx statuses are returned as a normal response; only failures that
/// produce no status become errors. Runs in the current thread; call from
/// `spawn_blocking` if used from async code.
pub(crate) fn get(url: &Url, opts: &RequestOptions) -> Result<HttpResponse, ApiError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;
    if let Some(ua) = &opts.user_agent {
        easy.useragent(ua)?;
    }

    let mut list = curl::easy::List::new();
    list.append("Accept: application/json")?;
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    tracing::debug!(%url, status, bytes = body.len(), "GET completed");
    Ok(HttpResponse {
        status,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}
