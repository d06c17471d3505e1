//! View models for each page the site serves

mod detail;
mod landing;
mod listing;

pub use detail::{load_detail, Attachment, DetailView};
pub use landing::{
    Card, ContactSection, CountryOption, LandingView, Service, ServiceCard, COUNTRY_CODES,
    SERVICES,
};
pub use listing::{
    load_listing, normalize_page_index, ListingView, PostCard, LOAD_FAILED, NO_POSTS, PAGE_BASE,
};

use serde::Serialize;

/// `<head>` data for a page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Extra `<meta>` tags, already escaped
    pub head: String,
}

impl PageMeta {
    pub fn titled(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            head: String::new(),
        }
    }
}
