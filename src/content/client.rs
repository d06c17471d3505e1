//! Typed client for the remote content API

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use super::post::{BlogListResponse, BlogPostDetail, PostStatus};
use crate::config::NewsConfig;

/// Errors raised while talking to the content API
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content API base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("content API request timed out")]
    Timeout,
    #[error("failed to reach content API: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("post {0} not found")]
    NotFound(u64),
    #[error("content API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid content API response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ContentError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ContentError::Timeout
        } else if err.is_decode() {
            ContentError::Decode(err.to_string())
        } else {
            ContentError::Transport(err)
        }
    }
}

/// Read access to blog posts
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch one page of active posts. `page_index` is 1-based.
    async fn list_posts(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> Result<BlogListResponse, ContentError>;

    /// Fetch a single active post.
    async fn get_post(&self, id: u64) -> Result<BlogPostDetail, ContentError>;
}

/// HTTP implementation of [`ContentSource`]
#[derive(Clone)]
pub struct ContentClient {
    http: Client,
    base_url: Url,
}

impl fmt::Debug for ContentClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ContentClient {
    /// Build a client from the news settings
    pub fn new(config: &NewsConfig) -> Result<Self, ContentError> {
        Self::with_base_url(
            &config.api_base_url,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, ContentError> {
        // Url::join drops the last segment unless the base ends with a slash
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|e| ContentError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        let http = Client::builder()
            .user_agent(concat!("winnow-site/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the paginated list endpoint, restricted to active posts
    pub fn list_url(&self, page_index: u32, page_size: u32) -> Result<Url, ContentError> {
        let mut url = self.endpoint("BlogPost/tenant-posts")?;
        url.query_pairs_mut()
            .append_pair("page", &page_index.to_string())
            .append_pair("pageSize", &page_size.to_string())
            .append_pair("status", &i32::from(PostStatus::Active).to_string());
        Ok(url)
    }

    /// URL of a single post
    pub fn post_url(&self, id: u64) -> Result<Url, ContentError> {
        self.endpoint(&format!("BlogPost/{id}"))
    }

    fn endpoint(&self, path: &str) -> Result<Url, ContentError> {
        self.base_url
            .join(path)
            .map_err(|e| ContentError::InvalidBaseUrl(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ContentError> {
        debug!(%url, "fetching from content API");
        let res = self.http.get(url).send().await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ContentError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(res.json::<T>().await?)
    }
}

#[async_trait]
impl ContentSource for ContentClient {
    async fn list_posts(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> Result<BlogListResponse, ContentError> {
        let url = self.list_url(page_index, page_size)?;
        let response: BlogListResponse = self.get_json(url).await?;
        if !response.is_consistent() {
            warn!(
                total = response.total_count,
                page_size = response.page_size,
                returned = response.posts.len(),
                "content API returned an inconsistent page"
            );
        }
        Ok(response)
    }

    async fn get_post(&self, id: u64) -> Result<BlogPostDetail, ContentError> {
        let url = self.post_url(id)?;
        let post: BlogPostDetail = match self.get_json(url).await {
            Ok(post) => post,
            Err(ContentError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                return Err(ContentError::NotFound(id))
            }
            Err(e) => return Err(e),
        };

        if post.status != PostStatus::Active {
            debug!(id, status = ?post.status, "post is not active");
            return Err(ContentError::NotFound(id));
        }
        Ok(post)
    }
}
