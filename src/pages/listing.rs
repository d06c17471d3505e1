//! News listing page

use serde::Serialize;
use tracing::warn;

use crate::content::{BlogListResponse, BlogPostSummary, ContentError, ContentSource};
use crate::helpers::{datetime_attr, long_date, paginator, total_pages, Pager, TagBadges, MAX_CARD_TAGS};

pub const LOAD_FAILED: &str = "Failed to load posts. Please try again later.";
pub const NO_POSTS: &str = "No articles available at the moment.";

/// Prefix of every numbered listing page
pub const PAGE_BASE: &str = "/news/page/";

/// Anything below 1 or not a number means the first page
pub fn normalize_page_index(raw: &str) -> u32 {
    raw.trim().parse::<u32>().map(|n| n.max(1)).unwrap_or(1)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCard {
    pub href: String,
    pub title: String,
    pub summary: Option<String>,
    pub date: String,
    pub datetime: String,
    pub tags: Option<TagBadges>,
    pub more_tags: Option<String>,
}

impl From<&BlogPostSummary> for PostCard {
    fn from(post: &BlogPostSummary) -> Self {
        let tags = post
            .tags
            .as_deref()
            .and_then(|t| TagBadges::new(t, MAX_CARD_TAGS));
        let more_tags = tags.as_ref().and_then(TagBadges::more_label);
        Self {
            href: format!("/news/{}", post.blog_post_id),
            title: post.title.clone(),
            summary: post.visible_summary().map(str::to_string),
            date: long_date(&post.created_date),
            datetime: datetime_attr(&post.created_date),
            tags,
            more_tags,
        }
    }
}

/// Everything the listing template shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView {
    pub page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub cards: Vec<PostCard>,
    /// "Showing n of total posts"
    pub showing: Option<String>,
    pub pager: Option<Pager>,
    pub error: Option<&'static str>,
    pub empty: Option<&'static str>,
}

impl ListingView {
    pub fn new(page: u32, page_size: u32, result: Result<BlogListResponse, ContentError>) -> Self {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                warn!(page, error = %e, "failed to fetch posts");
                return Self {
                    page,
                    total_pages: 0,
                    total_count: 0,
                    cards: Vec::new(),
                    showing: None,
                    pager: None,
                    error: Some(LOAD_FAILED),
                    empty: None,
                };
            }
        };

        let total = total_pages(response.total_count, page_size);
        let cards: Vec<PostCard> = response.posts.iter().map(PostCard::from).collect();

        if cards.is_empty() {
            return Self {
                page,
                total_pages: total,
                total_count: response.total_count,
                cards,
                showing: None,
                pager: None,
                error: None,
                empty: Some(NO_POSTS),
            };
        }

        Self {
            page,
            total_pages: total,
            total_count: response.total_count,
            showing: Some(format!(
                "Showing {} of {} posts",
                cards.len(),
                response.total_count
            )),
            cards,
            pager: Some(paginator(page, total, PAGE_BASE)),
            error: None,
            empty: None,
        }
    }
}

/// Fetch one page of posts and shape it for display
pub async fn load_listing(source: &dyn ContentSource, page: u32, page_size: u32) -> ListingView {
    let result = source.list_posts(page, page_size).await;
    ListingView::new(page, page_size, result)
}
