//! Run the site

use anyhow::Result;

use crate::server::{self, AppState};
use crate::Site;

/// Serve every page and the mail relay until interrupted
pub async fn run(site: &Site, ip: &str, port: u16) -> Result<()> {
    let state = AppState::from_config(site.config.clone())?;
    tracing::info!(
        "News API {}, mail relay to {}",
        site.config.news.api_base_url,
        site.config.mail.to_address
    );
    server::start(state, ip, port).await
}
