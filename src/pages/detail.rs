//! Single news article page

use serde::Serialize;
use tracing::{debug, warn};

use super::PageMeta;
use crate::config::SiteConfig;
use crate::content::{BlogFile, BlogPostDetail, ContentSource};
use crate::helpers::{
    datetime_attr, long_date, normalize_body, open_graph, partition_by_image, short_date,
    split_tags, truncate_chars, OpenGraph,
};
use crate::theme::FileIcon;

/// Description length when a post has no summary
const DESCRIPTION_CHARS: usize = 160;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    pub filename: String,
    pub href: String,
    pub icon: String,
}

impl From<&BlogFile> for Attachment {
    fn from(file: &BlogFile) -> Self {
        Self {
            filename: file.filename.clone(),
            href: file.file_binary.clone(),
            icon: FileIcon::for_filename(&file.filename).svg(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub id: u64,
    pub title: String,
    pub summary: Option<String>,
    /// Trusted markup, rendered unescaped
    pub body_html: String,
    pub date: String,
    pub datetime: String,
    pub updated: Option<String>,
    pub author: Option<&'static str>,
    pub tags: Vec<String>,
    pub images: Vec<Attachment>,
    pub documents: Vec<Attachment>,
    pub meta: PageMeta,
}

impl DetailView {
    pub fn new(post: &BlogPostDetail, site: &SiteConfig) -> Self {
        let (images, documents) = partition_by_image(&post.files, |f| f.filename.as_str());
        let summary = post.visible_summary().map(str::to_string);
        let tags = post.tags.as_deref().map(split_tags).unwrap_or_default();

        Self {
            id: post.blog_post_id,
            title: post.title.clone(),
            body_html: normalize_body(&post.body),
            date: long_date(&post.created_date),
            datetime: datetime_attr(&post.created_date),
            updated: post.last_updated.as_deref().map(short_date),
            author: post.created_by.as_ref().map(|_| "By Admin"),
            images: images.into_iter().map(Attachment::from).collect(),
            documents: documents.into_iter().map(Attachment::from).collect(),
            meta: article_meta(post, summary.as_deref(), &tags, site),
            summary,
            tags,
        }
    }
}

fn article_meta(
    post: &BlogPostDetail,
    summary: Option<&str>,
    tags: &[String],
    site: &SiteConfig,
) -> PageMeta {
    let url = format!("{}/news/{}", site.url.trim_end_matches('/'), post.blog_post_id);
    let description = summary
        .map(str::to_string)
        .unwrap_or_else(|| truncate_chars(&post.title, DESCRIPTION_CHARS));
    let modified = post.last_updated.as_deref().unwrap_or(&post.created_date);

    let head = open_graph(&OpenGraph {
        title: &post.title,
        description: summary.unwrap_or(&post.title),
        url: &url,
        site_name: &site.title,
        og_type: "article",
        published_time: Some(&post.created_date),
        modified_time: Some(modified),
        tags,
    });

    PageMeta {
        title: format!("{} - {}", post.title, site.title),
        description,
        head,
    }
}

/// Fetch a post by its raw path id. `None` means the page is not found.
pub async fn load_detail(
    source: &dyn ContentSource,
    raw_id: &str,
    site: &SiteConfig,
) -> Option<DetailView> {
    let id = match raw_id.parse::<u64>() {
        Ok(id) => id,
        Err(_) => {
            debug!("Non-numeric post id {:?}", raw_id);
            return None;
        }
    };

    match source.get_post(id).await {
        Ok(post) => Some(DetailView::new(&post, site)),
        Err(e) => {
            warn!(id, error = %e, "failed to load post");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostStatus;
    use crate::pages::tests::MemorySource;

    fn file(name: &str) -> BlogFile {
        BlogFile {
            filename: name.to_string(),
            file_binary: format!("https://cdn.example.com/{}", name),
        }
    }

    fn post() -> BlogPostDetail {
        BlogPostDetail {
            blog_post_id: 42,
            title: "New UAE AML rules".to_string(),
            body: "line1\n\nline2".to_string(),
            created_date: "2024-03-01T10:00:00".to_string(),
            last_updated: Some("2024-03-04T08:00:00".to_string()),
            status: PostStatus::Active,
            tags: Some("AML, UAE , ".to_string()),
            files: vec![file("report.pdf"), file("photo.PNG"), file("chart.svg")],
            summary: Some("What changed".to_string()),
            created_by: Some("u-17".to_string()),
        }
    }

    #[test]
    fn test_detail_view() {
        let view = DetailView::new(&post(), &SiteConfig::default());
        assert_eq!(view.body_html, "<p>line1</p><p>line2</p>");
        assert_eq!(view.date, "March 1, 2024");
        assert_eq!(view.updated.as_deref(), Some("Mar 4, 2024"));
        assert_eq!(view.author, Some("By Admin"));
        assert_eq!(view.tags, vec!["AML", "UAE"]);

        let images: Vec<_> = view.images.iter().map(|a| a.filename.as_str()).collect();
        assert_eq!(images, vec!["photo.PNG", "chart.svg"]);
        assert_eq!(view.documents.len(), 1);
        assert_eq!(view.documents[0].icon, FileIcon::Document.svg());
    }

    #[test]
    fn test_meta() {
        let view = DetailView::new(&post(), &SiteConfig::default());
        assert_eq!(view.meta.title, "New UAE AML rules - Winnow Management Solutions");
        assert_eq!(view.meta.description, "What changed");
        assert!(view.meta.head.contains(r#"<meta property="og:type" content="article">"#));
        assert!(view
            .meta
            .head
            .contains(r#"<meta property="article:modified_time" content="2024-03-04T08:00:00">"#));
        assert!(view.meta.head.contains(r#"<meta property="article:tag" content="UAE">"#));
    }

    #[test]
    fn test_description_falls_back_to_title() {
        let mut p = post();
        p.summary = Some("None".to_string());
        p.title = "x".repeat(200);
        let view = DetailView::new(&p, &SiteConfig::default());
        assert_eq!(view.summary, None);
        assert_eq!(view.meta.description.chars().count(), 160);
    }

    #[tokio::test]
    async fn test_load_detail_not_found_cases() {
        let source = MemorySource::with_posts(3);
        let site = SiteConfig::default();
        assert!(load_detail(&source, "2", &site).await.is_some());
        assert!(load_detail(&source, "99", &site).await.is_none());
        assert!(load_detail(&source, "abc", &site).await.is_none());
        assert!(load_detail(&MemorySource::failing(), "1", &site).await.is_none());
    }
}
