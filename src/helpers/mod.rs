//! Helper functions shared by the page renderers
//!
//! Date formatting, HTML post-processing, tag and page-link building,
//! attachment classification and URL encoding.

mod date;
mod files;
mod html;
mod list;
mod url;

pub use date::*;
pub use files::*;
pub use html::*;
pub use list::*;
pub use url::*;
