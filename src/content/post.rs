//! Blog post models as served by the remote content API

use serde::{Deserialize, Deserializer, Serialize};

/// Literal the content API stores when a post has no summary
pub const SUMMARY_NONE_SENTINEL: &str = "None";

/// Publication status of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum PostStatus {
    Draft,
    Active,
    Archived,
    Unknown(i32),
}

impl From<i32> for PostStatus {
    fn from(value: i32) -> Self {
        match value {
            0 => PostStatus::Draft,
            1 => PostStatus::Active,
            2 => PostStatus::Archived,
            other => PostStatus::Unknown(other),
        }
    }
}

impl From<PostStatus> for i32 {
    fn from(status: PostStatus) -> Self {
        match status {
            PostStatus::Draft => 0,
            PostStatus::Active => 1,
            PostStatus::Archived => 2,
            PostStatus::Unknown(other) => other,
        }
    }
}

/// A post as it appears in list views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostSummary {
    pub blog_post_id: u64,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    /// ISO timestamp, kept verbatim
    pub created_date: String,
    pub status: PostStatus,
    /// Comma-separated tag list
    #[serde(default)]
    pub tags: Option<String>,
}

impl BlogPostSummary {
    /// Summary text worth showing, if any
    pub fn visible_summary(&self) -> Option<&str> {
        visible_summary(self.summary.as_deref())
    }
}

/// A file attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogFile {
    pub filename: String,
    /// Fetchable URL of the file contents
    pub file_binary: String,
}

/// A full post record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDetail {
    pub blog_post_id: u64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub created_date: String,
    #[serde(default)]
    pub last_updated: Option<String>,
    pub status: PostStatus,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<BlogFile>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
}

impl BlogPostDetail {
    /// Summary text worth showing, if any
    pub fn visible_summary(&self) -> Option<&str> {
        visible_summary(self.summary.as_deref())
    }
}

/// One page of post summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogListResponse {
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub posts: Vec<BlogPostSummary>,
}

impl BlogListResponse {
    /// Whether the page respects `posts <= page_size` and `total >= posts`
    pub fn is_consistent(&self) -> bool {
        let len = self.posts.len() as u64;
        len <= u64::from(self.page_size) && self.total_count >= len
    }
}

/// `None`, blank and the API's `"None"` sentinel all mean "no summary"
pub fn visible_summary(summary: Option<&str>) -> Option<&str> {
    summary
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != SUMMARY_NONE_SENTINEL)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_response() {
        let json = r#"{
            "totalCount": 25,
            "page": 2,
            "pageSize": 12,
            "posts": [
                {
                    "blogPostId": 7,
                    "title": "FATF grey list update",
                    "summary": "None",
                    "createdDate": "2024-03-05T09:15:00",
                    "status": 1,
                    "tags": "AML, FATF"
                }
            ]
        }"#;
        let response: BlogListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_count, 25);
        assert_eq!(response.posts.len(), 1);
        assert_eq!(response.posts[0].status, PostStatus::Active);
        assert_eq!(response.posts[0].visible_summary(), None);
        assert!(response.is_consistent());
    }

    #[test]
    fn test_parse_detail_with_null_files() {
        let json = r#"{
            "blogPostId": 3,
            "title": "Hello",
            "body": "text",
            "createdDate": "2024-01-01T00:00:00Z",
            "status": 2,
            "files": null,
            "createdBy": "admin"
        }"#;
        let post: BlogPostDetail = serde_json::from_str(json).unwrap();
        assert!(post.files.is_empty());
        assert_eq!(post.status, PostStatus::Archived);
        assert_eq!(post.created_by.as_deref(), Some("admin"));
        assert_eq!(post.last_updated, None);
    }

    #[test]
    fn test_parse_detail_files() {
        let json = r#"{
            "blogPostId": 4,
            "title": "With files",
            "body": "",
            "createdDate": "2024-01-01",
            "status": 1,
            "files": [{"filename": "a.png", "fileBinary": "https://cdn/a.png"}]
        }"#;
        let post: BlogPostDetail = serde_json::from_str(json).unwrap();
        assert_eq!(post.files[0].file_binary, "https://cdn/a.png");
    }

    #[test]
    fn test_unknown_status_is_kept() {
        let status: PostStatus = serde_json::from_str("9").unwrap();
        assert_eq!(status, PostStatus::Unknown(9));
        assert_eq!(serde_json::to_string(&status).unwrap(), "9");
    }

    #[test]
    fn test_visible_summary() {
        assert_eq!(visible_summary(Some("None")), None);
        assert_eq!(visible_summary(Some("  ")), None);
        assert_eq!(visible_summary(None), None);
        assert_eq!(visible_summary(Some("Short intro")), Some("Short intro"));
    }

    #[test]
    fn test_inconsistent_page() {
        let response = BlogListResponse {
            total_count: 0,
            page: 1,
            page_size: 12,
            posts: vec![BlogPostSummary {
                blog_post_id: 1,
                title: "x".into(),
                summary: None,
                created_date: "2024-01-01".into(),
                status: PostStatus::Active,
                tags: None,
            }],
        };
        assert!(!response.is_consistent());
    }
}
