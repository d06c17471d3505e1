//! Site templates using the Tera template engine
//!
//! Every page template is embedded in the binary; pages extend
//! `layout.html` and receive `layout`, `meta` and `page` in their context.

use anyhow::Result;
use chrono::Datelike;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::{CompanyConfig, SiteConfig};
use crate::helpers::html_escape;
use crate::pages::{DetailView, LandingView, ListingView, PageMeta};
use crate::theme::Theme;

/// Template renderer with the embedded site theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all site templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Remote strings are escaped; trusted markup goes through `safe`.
        // Slashes stay as-is so paths and URLs read naturally.
        tera.autoescape_on(vec![".html"]);
        tera.set_escape_fn(html_escape);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("index.html", include_str!("site/index.html")),
            ("news_list.html", include_str!("site/news_list.html")),
            ("news_detail.html", include_str!("site/news_detail.html")),
            ("not_found.html", include_str!("site/not_found.html")),
            // Partials
            (
                "partials/header.html",
                include_str!("site/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("site/partials/footer.html"),
            ),
            (
                "partials/pager.html",
                include_str!("site/partials/pager.html"),
            ),
            (
                "partials/contact_form.html",
                include_str!("site/partials/contact_form.html"),
            ),
            (
                "partials/toast.html",
                include_str!("site/partials/toast.html"),
            ),
        ])?;

        tera.register_filter("strip_html", strip_html_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    fn render_page<T: Serialize>(
        &self,
        template_name: &str,
        layout: &LayoutData,
        meta: &PageMeta,
        page: &T,
    ) -> Result<String> {
        let mut context = Context::new();
        context.insert("layout", layout);
        context.insert("meta", meta);
        context.insert("page", page);
        self.render(template_name, &context)
    }

    pub fn landing(&self, layout: &LayoutData, view: &LandingView) -> Result<String> {
        let meta = PageMeta::titled(&layout.site_title, &layout.description);
        self.render_page("index.html", layout, &meta, view)
    }

    pub fn news_list(&self, layout: &LayoutData, view: &ListingView) -> Result<String> {
        let meta = PageMeta::titled(
            format!("News - {}", layout.site_title),
            "Latest news and insights on AML compliance.",
        );
        self.render_page("news_list.html", layout, &meta, view)
    }

    pub fn news_detail(&self, layout: &LayoutData, view: &DetailView) -> Result<String> {
        self.render_page("news_detail.html", layout, &view.meta, view)
    }

    pub fn not_found(&self, layout: &LayoutData, view: &NotFoundView) -> Result<String> {
        self.render_page("not_found.html", layout, &view.meta(&layout.site_title), view)
    }
}

/// Tera filter: strip HTML tags
fn strip_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("strip_html", "value", String, value);
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    Ok(tera::Value::String(result))
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "...".to_string(),
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!(
            "{}{}",
            truncated.trim_end(),
            omission
        )))
    }
}

/// Site-wide data for the layout, header and footer
#[derive(Debug, Clone, Serialize)]
pub struct LayoutData {
    pub site_title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub language: String,
    pub company: CompanyConfig,
    pub dark: bool,
    pub next_theme: &'static str,
    /// Request path, used to come back after a theme switch
    pub path: String,
    /// Top-level section for nav highlighting ("home", "news")
    pub section: &'static str,
    pub year: i32,
}

impl LayoutData {
    pub fn new(site: &SiteConfig, theme: Theme, path: &str) -> Self {
        Self {
            site_title: site.title.clone(),
            description: site.description.clone(),
            keywords: site.keywords.clone(),
            language: site.language.clone(),
            company: site.company.clone(),
            dark: theme == Theme::Dark,
            next_theme: theme.toggled().as_str(),
            path: path.to_string(),
            section: if path.starts_with("/news") { "news" } else { "home" },
            year: chrono::Local::now().year(),
        }
    }
}

/// Body of the 404 page
#[derive(Debug, Clone, Serialize)]
pub struct NotFoundView {
    pub heading: &'static str,
    pub message: &'static str,
    pub back_href: &'static str,
    pub back_label: &'static str,
}

impl NotFoundView {
    /// A missing or unreadable article
    pub fn post() -> Self {
        Self {
            heading: "Blog Post Not Found",
            message: "The article you are looking for does not exist or is no longer available.",
            back_href: "/news",
            back_label: "Back to News",
        }
    }

    pub fn page() -> Self {
        Self {
            heading: "Page Not Found",
            message: "The page you are looking for does not exist.",
            back_href: "/",
            back_label: "Back to Home",
        }
    }

    fn meta(&self, site_title: &str) -> PageMeta {
        PageMeta::titled(format!("{} - {}", self.heading, site_title), self.message)
    }
}
