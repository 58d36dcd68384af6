//! GitHub Releases API implementation of [`ReleaseSource`]

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, LINK};
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{
    FETCH_TIMEOUT_MS, MAX_RELEASE_PAGES, RELEASES_PER_PAGE, Source, USER_AGENT,
};
use crate::release::error::SourceError;
use crate::release::source::ReleaseSource;
use crate::release::types::Release;

/// Release source backed by the GitHub REST API
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
    owner: String,
    repository: String,
}

impl GitHubClient {
    /// Creates a client for the repository named in `source`
    pub fn new(source: &Source) -> Result<Self, SourceError> {
        let base_url = Url::parse(source.api_url())
            .map_err(|e| SourceError::InvalidBaseUrl(format!("{}: {}", source.api_url(), e)))?;
        if base_url.cannot_be_a_base() {
            return Err(SourceError::InvalidBaseUrl(source.api_url().to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: source.token().map(str::to_string),
            owner: source.user.clone(),
            repository: source.repository.clone(),
        })
    }

    /// Builds `{base}/repos/{owner}/{repo}/releases/{segments..}`, encoding each segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SourceError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["repos", self.owner.as_str(), self.repository.as_str(), "releases"])
            .extend(segments);
        Ok(url)
    }

    /// Whether a `rel="next"` link may be requested after `pages` pages.
    ///
    /// The bearer token is only ever sent to the configured API origin.
    fn follows(&self, next: &Url, pages: usize) -> bool {
        if next.origin() != self.base_url.origin() {
            warn!("Ignoring next page on a different origin: {}", next);
            return false;
        }
        if pages >= MAX_RELEASE_PAGES {
            warn!(
                "Stopped listing releases after {} pages for {}/{}",
                pages, self.owner, self.repository
            );
            return false;
        }
        true
    }

    async fn get(&self, url: Url) -> Result<Response, SourceError> {
        debug!("GET {}", url);

        let mut request = self.client.get(url.clone());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        check_status(response, &url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, SourceError> {
        let response = self.get(url).await?;
        decode(response).await
    }
}

#[async_trait::async_trait]
impl ReleaseSource for GitHubClient {
    async fn list_releases(&self) -> Result<Vec<Release>, SourceError> {
        let mut first_page = self.endpoint(&[])?;
        first_page
            .query_pairs_mut()
            .append_pair("per_page", &RELEASES_PER_PAGE.to_string())
            .append_pair("page", "1");

        let mut releases = Vec::new();
        let mut next = Some(first_page);
        let mut pages = 0;

        while let Some(url) = next.take() {
            let response = self.get(url).await?;
            pages += 1;
            next = next_page_url(response.headers()).filter(|url| self.follows(url, pages));
            let page: Vec<Release> = decode(response).await?;
            releases.extend(page);
        }

        debug!(
            "Fetched {} releases for {}/{}",
            releases.len(),
            self.owner,
            self.repository
        );
        Ok(releases)
    }

    async fn get_release_by_tag(&self, tag: &str) -> Result<Release, SourceError> {
        let url = self.endpoint(&["tags", tag])?;
        self.get_json(url).await
    }

    async fn get_release(&self, id: u64) -> Result<Release, SourceError> {
        let id = id.to_string();
        let url = self.endpoint(&[id.as_str()])?;
        self.get_json(url).await
    }
}

fn check_status(response: Response, url: &Url) -> Result<Response, SourceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let headers = response.headers();
    let rate_limit_exhausted = headers
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0");

    if status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN && rate_limit_exhausted)
    {
        let retry_after = headers
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        return Err(SourceError::RateLimited {
            retry_after_secs: retry_after,
        });
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(SourceError::Unauthorized),
        StatusCode::NOT_FOUND => Err(SourceError::NotFound(url.path().to_string())),
        _ => {
            warn!("GitHub API returned status {}: {}", status, url);
            Err(SourceError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )))
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, SourceError> {
    response.json().await.map_err(|e| {
        warn!("Failed to parse GitHub releases response: {}", e);
        SourceError::InvalidResponse(e.to_string())
    })
}

/// Extracts the `rel="next"` target from a `Link` header
fn next_page_url(headers: &HeaderMap) -> Option<Url> {
    let link = headers.get(LINK)?.to_str().ok()?;

    link.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|param| param.trim() == r#"rel="next""#);
        if !is_next {
            return None;
        }
        let target = target.strip_prefix('<')?.strip_suffix('>')?;
        Url::parse(target).ok()
    })
}
