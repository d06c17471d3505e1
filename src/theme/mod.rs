//! Color theme preference and icon assets

mod icons;

pub use icons::{FileIcon, HighlightIcon, ServiceIcon};

use serde::Serialize;

/// Cookie holding the visitor's theme choice
pub const THEME_COOKIE: &str = "theme";

/// Light or dark rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Read the theme from a raw `Cookie` header; light when absent
    pub fn from_cookie_header(header: Option<&str>) -> Self {
        header
            .into_iter()
            .flat_map(|h| h.split(';'))
            .filter_map(|pair| pair.split_once('='))
            .find(|(name, _)| name.trim() == THEME_COOKIE)
            .map(|(_, value)| match value.trim() {
                "dark" => Theme::Dark,
                _ => Theme::Light,
            })
            .unwrap_or_default()
    }

    /// `Set-Cookie` value persisting this theme for a year
    pub fn set_cookie(self) -> String {
        format!(
            "{}={}; Path=/; Max-Age=31536000; SameSite=Lax",
            THEME_COOKIE,
            self.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cookie_header() {
        assert_eq!(Theme::from_cookie_header(None), Theme::Light);
        assert_eq!(
            Theme::from_cookie_header(Some("a=1; theme=dark; b=2")),
            Theme::Dark
        );
        assert_eq!(Theme::from_cookie_header(Some("theme=neon")), Theme::Light);
        assert_eq!(Theme::from_cookie_header(Some("themes=dark")), Theme::Light);
    }

    #[test]
    fn test_toggle_and_cookie() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!(Theme::Dark.set_cookie().starts_with("theme=dark;"));
    }
}
