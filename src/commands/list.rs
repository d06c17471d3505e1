//! List one page of news posts

use anyhow::{Context, Result};

use crate::content::{BlogListResponse, ContentSource};
use crate::helpers::{short_date, split_tags, total_pages};

/// Fetch and print a page of posts
pub async fn run(source: &dyn ContentSource, page: u32, page_size: u32) -> Result<()> {
    let page = page.max(1);
    let response = source
        .list_posts(page, page_size)
        .await
        .with_context(|| format!("Failed to fetch page {} of posts", page))?;
    print!("{}", format_listing(&response, page, page_size));
    Ok(())
}

/// One line per post, newest first as the API returns them
pub fn format_listing(response: &BlogListResponse, page: u32, page_size: u32) -> String {
    let mut out = format!(
        "Posts (page {} of {}, {} total):\n",
        page,
        total_pages(response.total_count, page_size),
        response.total_count
    );
    for post in &response.posts {
        out.push_str(&format!(
            "  {} - {} [#{}]",
            short_date(&post.created_date),
            post.title,
            post.blog_post_id
        ));
        let tags = post.tags.as_deref().map(split_tags).unwrap_or_default();
        if !tags.is_empty() {
            out.push_str(&format!(" ({})", tags.join(", ")));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::tests::MemorySource;

    #[tokio::test]
    async fn test_format_listing() {
        let source = MemorySource::with_posts(14);
        let response = source.list_posts(2, 12).await.unwrap();
        let out = format_listing(&response, 2, 12);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Posts (page 2 of 2, 14 total):");
        assert_eq!(lines[1], "  Jan 5, 2024 - Post 2 [#2] (AML, KYC)");
        assert_eq!(lines.len(), 3);
    }

    #[tokio::test]
    async fn test_run_propagates_fetch_error() {
        let err = run(&MemorySource::failing(), 1, 12).await.unwrap_err();
        assert!(err.to_string().contains("Failed to fetch page 1"));
    }
}
