//! Content: blog post models and the remote content API client

mod client;
mod post;

pub use client::{ContentClient, ContentError, ContentSource};
pub use post::*;
