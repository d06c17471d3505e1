//! winnow-site: the Winnow Management Solutions website
//!
//! Serves the marketing landing page, the news section backed by a remote
//! content API, and the contact form with its SMTP mail relay.

pub mod commands;
pub mod config;
pub mod contact;
pub mod content;
pub mod helpers;
pub mod pages;
pub mod server;
pub mod state;
pub mod templates;
pub mod theme;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The site application
#[derive(Clone)]
pub struct Site {
    /// Site configuration, environment overrides applied
    pub config: config::SiteConfig,
    /// Directory holding the configuration file
    pub base_dir: PathBuf,
}

impl Site {
    /// Load a site from its configuration file.
    ///
    /// A missing file means defaults; relative paths in the configuration
    /// resolve against the file's directory.
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        let mut config = config::SiteConfig::load_or_default(config_path)?;

        let base_dir = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        if Path::new(&config.static_dir).is_relative() {
            config.static_dir = base_dir.join(&config.static_dir).to_string_lossy().into_owned();
        }

        Ok(Self { config, base_dir })
    }

    /// Run the web server
    pub async fn serve(&self, ip: &str, port: u16) -> Result<()> {
        commands::serve::run(self, ip, port).await
    }

    /// Print one page of news
    pub async fn list(&self, page: u32) -> Result<()> {
        let client = content::ContentClient::new(&self.config.news)?;
        commands::list::run(&client, page, self.config.news.per_page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_resolves_static_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "title: Test Site\nstatic_dir: assets\n").unwrap();

        let site = Site::load(&path).unwrap();
        assert_eq!(site.config.title, "Test Site");
        assert_eq!(site.base_dir, dir.path());
        assert_eq!(
            PathBuf::from(&site.config.static_dir),
            dir.path().join("assets")
        );
    }

    #[test]
    fn test_load_without_file() {
        let site = Site::load("does-not-exist.yml").unwrap();
        assert_eq!(site.base_dir, PathBuf::from("."));
        assert_eq!(site.config.news.per_page, 12);
    }
}
