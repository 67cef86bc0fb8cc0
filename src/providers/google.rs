//! Google search provider — scrapes the HTML results page.
//!
//! Organic results wrap their title in an `<h3>` inside the result anchor,
//! which separates them from navigation chrome and "people also ask"
//! links. Older response variants wrap hrefs in a `/url?q=` redirect that
//! must be unwrapped. Google paginates with the `start` offset parameter,
//! so deep result sets take several requests with jitter between them.

use std::collections::HashSet;
use std::time::Duration;

use rand::Rng;
use scraper::{Html, Selector};
use url::Url;

use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::http;
use crate::provider::SearchProvider;

const SEARCH_URL: &str = "https://www.google.com/search";

/// Most results Google will serve on a single page.
const MAX_PAGE_SIZE: usize = 100;

/// Google HTML search scraper.
///
/// Best result quality but the most aggressive bot detection of the major
/// engines; requests go through the shared cookie-enabled client with a
/// browser User-Agent, and pagination is paced with random jitter.
pub struct GoogleProvider {
    client: reqwest::Client,
    request_delay_ms: (u64, u64),
}

impl GoogleProvider {
    /// Build a provider from finder configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &FinderConfig) -> Result<Self, FinderError> {
        Ok(Self {
            client: http::build_client(config)?,
            request_delay_ms: config.request_delay_ms,
        })
    }

    /// Sleep for a random interval inside the configured jitter range.
    async fn jitter_delay(&self) {
        let (min, max) = self.request_delay_ms;
        if max == 0 {
            return;
        }
        let delay = {
            let mut rng = rand::thread_rng();
            rng.gen_range(min..=max)
        };
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    /// Resolve a result anchor's href to an external absolute URL.
    ///
    /// `/url?q=https%3A%2F%2Fexample.com&sa=...` redirects are unwrapped;
    /// direct links are kept unless they point back into Google itself.
    fn extract_url(href: &str) -> Option<String> {
        if let Some(params) = href.strip_prefix("/url?") {
            return url::form_urlencoded::parse(params.as_bytes())
                .find(|(key, _)| key == "q" || key == "url")
                .map(|(_, value)| value.into_owned())
                .filter(|target| target.starts_with("http"));
        }

        if href.starts_with("http") {
            let parsed = Url::parse(href).ok()?;
            let host = parsed.host_str()?;
            if host.ends_with("google.com") || host.ends_with("googleusercontent.com") {
                return None;
            }
            return Some(href.to_owned());
        }

        None
    }
}

impl SearchProvider for GoogleProvider {
    async fn search(
        &self,
        query: &str,
        region: &str,
        num_results: usize,
    ) -> Result<Vec<String>, FinderError> {
        tracing::trace!(query, region, num_results, "Google search");

        let mut urls: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut start = 0usize;

        while urls.len() < num_results {
            if start > 0 {
                self.jitter_delay().await;
            }

            let page_size = num_results.min(MAX_PAGE_SIZE);
            let num_param = page_size.to_string();
            let start_param = start.to_string();
            let response = self
                .client
                .get(SEARCH_URL)
                .query(&[
                    ("q", query),
                    ("hl", "en"),
                    ("gl", region),
                    ("num", num_param.as_str()),
                    ("start", start_param.as_str()),
                ])
                .header("Accept", "text/html,application/xhtml+xml")
                .header("Accept-Language", "en-US,en;q=0.9")
                .send()
                .await
                .map_err(|e| FinderError::Search(format!("Google request failed: {e}")))?
                .error_for_status()
                .map_err(|e| FinderError::Search(format!("Google HTTP error: {e}")))?;

            let html = response
                .text()
                .await
                .map_err(|e| FinderError::Search(format!("Google response read failed: {e}")))?;

            tracing::trace!(bytes = html.len(), start, "Google response received");

            let page_urls = parse_google_html(&html)?;
            if page_urls.is_empty() {
                break;
            }

            let before = urls.len();
            for url in page_urls {
                if seen.insert(url.clone()) {
                    urls.push(url);
                    if urls.len() >= num_results {
                        break;
                    }
                }
            }
            // A page of nothing but repeats means pagination has run dry.
            if urls.len() == before {
                break;
            }

            start += page_size;
        }

        tracing::debug!(query, count = urls.len(), "Google results collected");
        Ok(urls)
    }
}

/// Parse a Google results page into an ordered list of external URLs.
///
/// Extracted as a separate function for testability with mock HTML.
///
/// # Errors
///
/// Returns [`FinderError::Parse`] on an invalid selector and
/// [`FinderError::Search`] when Google serves a CAPTCHA interstitial
/// instead of results.
pub(crate) fn parse_google_html(html: &str) -> Result<Vec<String>, FinderError> {
    let document = Html::parse_document(html);

    let anchor_sel = Selector::parse("a[href]")
        .map_err(|e| FinderError::Parse(format!("invalid anchor selector: {e:?}")))?;
    let heading_sel = Selector::parse("h3")
        .map_err(|e| FinderError::Parse(format!("invalid heading selector: {e:?}")))?;

    let mut urls = Vec::new();
    let mut seen = HashSet::new();

    for anchor in document.select(&anchor_sel) {
        if anchor.select(&heading_sel).next().is_none() {
            continue;
        }
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Some(url) = GoogleProvider::extract_url(href) else {
            continue;
        };
        if seen.insert(url.clone()) {
            urls.push(url);
        }
    }

    if urls.is_empty() {
        if html.contains("did not match any documents") {
            return Ok(Vec::new());
        }
        if html.contains("unusual traffic") || html.contains("/sorry/") {
            return Err(FinderError::Search(
                "Google served a CAPTCHA interstitial".into(),
            ));
        }
    }

    Ok(urls)
}
