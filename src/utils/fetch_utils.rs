use crate::config::{MAX_BODY_BYTES, MAX_REDIRECTS, SEO_FETCH_TIMEOUT, SPEED_FETCH_TIMEOUT};
use crate::error::AnalysisError;
use encoding_rs::{Encoding, UTF_8};
use futures::future::BoxFuture;
use futures::{FutureExt, StreamExt};
use log::{debug, warn};
use reqwest::{
    header::{HeaderMap, CONTENT_TYPE},
    redirect, Client, StatusCode,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub max_redirects: usize,
    pub max_body_bytes: usize,
}

impl FetchOptions {
    pub fn seo() -> Self {
        Self {
            timeout: SEO_FETCH_TIMEOUT,
            max_redirects: MAX_REDIRECTS,
            max_body_bytes: MAX_BODY_BYTES,
        }
    }

    pub fn speed_fallback() -> Self {
        Self {
            timeout: SPEED_FETCH_TIMEOUT,
            max_redirects: MAX_REDIRECTS,
            max_body_bytes: MAX_BODY_BYTES,
        }
    }
}

/// A completed GET. `ttfb_ms` is measured when the response head arrives,
/// `elapsed_ms` once the whole body has been read.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub final_url: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    pub ttfb_ms: u64,
    pub elapsed_ms: u64,
}

impl FetchedPage {
    /// Decodes the body using the `Content-Type` charset, UTF-8 when the
    /// header is absent or names an unknown encoding. A BOM wins over both.
    pub fn text(&self) -> String {
        let encoding = self
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(charset_label)
            .and_then(|label| Encoding::for_label(label.as_bytes()))
            .unwrap_or(UTF_8);
        let (text, _, had_errors) = encoding.decode(&self.body);
        if had_errors {
            debug!("Body of {} had bytes invalid for {}", self.final_url, encoding.name());
        }
        text.into_owned()
    }

    pub fn byte_len(&self) -> usize {
        self.body.len()
    }
}

/// Outbound page retrieval. Handlers only see this trait so tests can swap in
/// canned pages.
pub trait PageFetcher: Send + Sync {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
        options: FetchOptions,
    ) -> BoxFuture<'a, Result<FetchedPage, AnalysisError>>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }

    async fn get(&self, url: &str, options: FetchOptions) -> Result<FetchedPage, AnalysisError> {
        let client = Client::builder()
            .user_agent(self.user_agent.as_str())
            .redirect(redirect::Policy::limited(options.max_redirects))
            .timeout(options.timeout)
            .build()
            .map_err(|e| AnalysisError::Upstream(format!("Failed to build HTTP client: {}", e)))?;

        let start = Instant::now();
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, options, &e))?;
        let ttfb_ms = start.elapsed().as_millis() as u64;

        let status = response.status();
        let final_url = response.url().to_string();
        debug!("GET {} -> {} ({} ms to headers)", url, status, ttfb_ms);

        check_status(url, status)?;

        let headers = response.headers().clone();
        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| transport_error(url, options, &e))?;
            if body.len() + chunk.len() > options.max_body_bytes {
                warn!("{} exceeded {} bytes, aborting read", url, options.max_body_bytes);
                return Err(AnalysisError::Upstream(format!(
                    "{} returned a body larger than {} bytes",
                    url, options.max_body_bytes
                )));
            }
            body.extend_from_slice(&chunk);
        }
        let elapsed_ms = start.elapsed().as_millis() as u64;

        Ok(FetchedPage {
            status: status.as_u16(),
            final_url,
            headers,
            body,
            ttfb_ms,
            elapsed_ms,
        })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
        options: FetchOptions,
    ) -> BoxFuture<'a, Result<FetchedPage, AnalysisError>> {
        self.get(url, options).boxed()
    }
}

fn charset_label(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"').to_string())
    })
}

fn check_status(url: &str, status: StatusCode) -> Result<(), AnalysisError> {
    if status == StatusCode::NOT_FOUND {
        return Err(AnalysisError::NotFound(url.to_string()));
    }
    if status.is_client_error() || status.is_server_error() {
        warn!("{} answered with {}", url, status);
        return Err(AnalysisError::Upstream(format!(
            "{} responded with status {}",
            url,
            status.as_u16()
        )));
    }
    Ok(())
}

fn transport_error(url: &str, options: FetchOptions, err: &reqwest::Error) -> AnalysisError {
    warn!("Fetch of {} failed: {}", url, err);
    if err.is_timeout() {
        AnalysisError::Upstream(format!(
            "{} did not respond within {}s",
            url,
            options.timeout.as_secs()
        ))
    } else if err.is_connect() {
        AnalysisError::UnreachableHost(url.to_string())
    } else if err.is_redirect() {
        AnalysisError::Upstream(format!(
            "{} redirected more than {} times",
            url, options.max_redirects
        ))
    } else {
        AnalysisError::Upstream(format!("Request to {} failed: {}", url, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_its_own_error() {
        assert_eq!(
            check_status("https://a.test/", StatusCode::NOT_FOUND),
            Err(AnalysisError::NotFound("https://a.test/".into()))
        );
    }

    #[test]
    fn success_and_redirect_statuses_pass() {
        assert!(check_status("u", StatusCode::OK).is_ok());
        assert!(check_status("u", StatusCode::NOT_MODIFIED).is_ok());
    }

    #[test]
    fn other_error_statuses_are_upstream() {
        assert!(matches!(
            check_status("u", StatusCode::INTERNAL_SERVER_ERROR),
            Err(AnalysisError::Upstream(_))
        ));
        assert!(matches!(
            check_status("u", StatusCode::FORBIDDEN),
            Err(AnalysisError::Upstream(_))
        ));
    }

    fn page_with(content_type: Option<&str>, body: Vec<u8>) -> FetchedPage {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type {
            headers.insert(CONTENT_TYPE, ct.parse().unwrap());
        }
        FetchedPage {
            status: 200,
            final_url: "https://a.test/".to_string(),
            headers,
            body,
            ttfb_ms: 1,
            elapsed_ms: 2,
        }
    }

    #[test]
    fn charset_is_read_from_content_type() {
        assert_eq!(
            charset_label("text/html; charset=Shift_JIS").as_deref(),
            Some("Shift_JIS")
        );
        assert_eq!(
            charset_label("text/html;CHARSET=\"iso-8859-1\"").as_deref(),
            Some("iso-8859-1")
        );
        assert_eq!(charset_label("text/html"), None);
    }

    #[test]
    fn text_decodes_with_declared_charset() {
        let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode("Café");
        let page = page_with(Some("text/html; charset=windows-1252"), bytes.into_owned());
        assert_eq!(page.text(), "Café");
        assert_eq!(page.byte_len(), 4);
    }

    #[test]
    fn text_falls_back_to_utf8() {
        let body = "Café".as_bytes().to_vec();
        assert_eq!(page_with(None, body.clone()).text(), "Café");
        assert_eq!(
            page_with(Some("text/html; charset=no-such-charset"), body).text(),
            "Café"
        );
    }

    #[test]
    fn option_presets_use_path_timeouts() {
        assert_eq!(FetchOptions::seo().timeout, Duration::from_secs(10));
        assert_eq!(FetchOptions::speed_fallback().timeout, Duration::from_secs(20));
        assert_eq!(FetchOptions::seo().max_redirects, 5);
        assert_eq!(FetchOptions::seo().max_body_bytes, MAX_BODY_BYTES);
    }
}
