//! HTML helper functions

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Two or more line breaks, whitespace allowed in between
    static ref BREAK_RUN: Regex = Regex::new(r"(<br>\s*){2,}").expect("valid break regex");
}

/// Turn a post body with raw newlines into paragraph markup.
///
/// Newlines become `<br>`, runs of breaks become paragraph boundaries, and
/// the whole thing is wrapped in `<p>` unless it already opens with a tag.
/// The result is emitted as-is: this does not sanitize anything.
///
/// # Examples
/// ```ignore
/// normalize_body("line1\n\nline2") // -> "<p>line1</p><p>line2</p>"
/// ```
pub fn normalize_body(body: &str) -> String {
    let with_breaks = body.replace('\n', "<br>");
    let paragraphs = BREAK_RUN.replace_all(&with_breaks, "</p><p>");

    if paragraphs.trim().starts_with('<') {
        paragraphs.into_owned()
    } else {
        format!("<p>{}</p>", paragraphs)
    }
}

/// A page's `<meta>` description and Open Graph data
#[derive(Debug, Clone, Default)]
pub struct OpenGraph<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub url: &'a str,
    pub site_name: &'a str,
    pub og_type: &'a str,
    pub published_time: Option<&'a str>,
    pub modified_time: Option<&'a str>,
    pub tags: &'a [String],
}

/// Generate Open Graph meta tags
pub fn open_graph(og: &OpenGraph<'_>) -> String {
    let og_type = if og.og_type.is_empty() {
        "website"
    } else {
        og.og_type
    };

    let mut tags = vec![
        format!(r#"<meta property="og:type" content="{}">"#, og_type),
        format!(
            r#"<meta property="og:title" content="{}">"#,
            html_escape(og.title)
        ),
        format!(
            r#"<meta property="og:site_name" content="{}">"#,
            html_escape(og.site_name)
        ),
        format!(r#"<meta name="twitter:card" content="summary_large_image">"#),
        format!(
            r#"<meta name="twitter:title" content="{}">"#,
            html_escape(og.title)
        ),
    ];

    if !og.url.is_empty() {
        tags.push(format!(
            r#"<meta property="og:url" content="{}">"#,
            html_escape(og.url)
        ));
    }

    if !og.description.is_empty() {
        tags.push(format!(
            r#"<meta property="og:description" content="{}">"#,
            html_escape(og.description)
        ));
        tags.push(format!(
            r#"<meta name="twitter:description" content="{}">"#,
            html_escape(og.description)
        ));
    }

    if let Some(published) = og.published_time {
        tags.push(format!(
            r#"<meta property="article:published_time" content="{}">"#,
            html_escape(published)
        ));
    }

    if let Some(modified) = og.modified_time {
        tags.push(format!(
            r#"<meta property="article:modified_time" content="{}">"#,
            html_escape(modified)
        ));
    }

    for tag in og.tags {
        tags.push(format!(
            r#"<meta property="article:tag" content="{}">"#,
            html_escape(tag)
        ));
    }

    tags.join("\n")
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Truncate a string to at most `length` characters, no omission marker
pub fn truncate_chars(s: &str, length: usize) -> String {
    s.chars().take(length).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_splits_paragraphs() {
        assert_eq!(normalize_body("line1\n\nline2"), "<p>line1</p><p>line2</p>");
    }

    #[test]
    fn test_single_newline_is_a_break() {
        assert_eq!(normalize_body("a\nb"), "<p>a<br>b</p>");
    }

    #[test]
    fn test_break_runs_with_whitespace_collapse() {
        assert_eq!(normalize_body("a\n  \n \nb"), "<p>a</p><p>b</p>");
        assert_eq!(normalize_body("a<br> <br>b"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_markup_is_not_wrapped() {
        assert_eq!(
            normalize_body("<h2>Title</h2>\nText"),
            "<h2>Title</h2><br>Text"
        );
        assert_eq!(normalize_body("  <div>x</div>"), "  <div>x</div>");
    }

    #[test]
    fn test_no_double_break_survives() {
        let out = normalize_body("one\n\n\n\ntwo\n\nthree");
        assert!(!out.contains("<br><br>"));
        assert_eq!(out, "<p>one</p><p>two</p><p>three</p>");
    }

    #[test]
    fn test_open_graph_article() {
        let tags = vec!["AML".to_string()];
        let og = OpenGraph {
            title: "Fish & Chips",
            description: "desc",
            site_name: "Site",
            og_type: "article",
            published_time: Some("2024-01-01"),
            tags: &tags,
            ..Default::default()
        };
        let html = open_graph(&og);
        assert!(html.contains(r#"content="article""#));
        assert!(html.contains("Fish &amp; Chips"));
        assert!(html.contains(r#"<meta property="article:tag" content="AML">"#));
        assert!(html.contains("article:published_time"));
        assert!(!html.contains("og:url"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape(r#"<a href="x">"#), "&lt;a href=&quot;x&quot;&gt;");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("Hello World", 5), "Hello");
        assert_eq!(truncate_chars("Hi", 10), "Hi");
    }
}
