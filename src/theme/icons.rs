//! Icon tables: each closed set of keys maps to an inline SVG asset

use serde::Serialize;

use crate::helpers::is_image_file;

const SVG_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">"#;

fn svg(paths: &str) -> String {
    format!("{}{}</svg>", SVG_OPEN, paths)
}

/// Attachment type icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileIcon {
    Image,
    Document,
}

impl FileIcon {
    /// Picked solely from the filename extension
    pub fn for_filename(filename: &str) -> Self {
        if is_image_file(filename) {
            FileIcon::Image
        } else {
            FileIcon::Document
        }
    }

    pub fn svg(self) -> String {
        match self {
            FileIcon::Image => svg(
                r#"<rect x="3" y="3" width="18" height="18" rx="2"/><circle cx="9" cy="9" r="2"/><path d="m21 15-3.1-3.1a2 2 0 0 0-2.8 0L6 21"/>"#,
            ),
            FileIcon::Document => svg(
                r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/><path d="M10 9H8"/><path d="M16 13H8"/><path d="M16 17H8"/>"#,
            ),
        }
    }
}

/// Icons for the services grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ServiceIcon {
    ShieldCheck,
    FileText,
    UserCheck,
    Search,
    UserPlus,
    BarChart,
    FileSignature,
    ClipboardList,
    GraduationCap,
    FileSearch,
    MessageSquare,
    Briefcase,
}

impl ServiceIcon {
    pub fn svg(self) -> String {
        let paths = match self {
            ServiceIcon::ShieldCheck => {
                r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/><path d="m9 12 2 2 4-4"/>"#
            }
            ServiceIcon::FileText => {
                r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M16 13H8"/><path d="M16 17H8"/>"#
            }
            ServiceIcon::UserCheck => {
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><polyline points="16 11 18 13 22 9"/>"#
            }
            ServiceIcon::Search => r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
            ServiceIcon::UserPlus => {
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><line x1="19" x2="19" y1="8" y2="14"/><line x1="22" x2="16" y1="11" y2="11"/>"#
            }
            ServiceIcon::BarChart => {
                r#"<line x1="12" x2="12" y1="20" y2="10"/><line x1="18" x2="18" y1="20" y2="4"/><line x1="6" x2="6" y1="20" y2="16"/>"#
            }
            ServiceIcon::FileSignature => {
                r#"<path d="M20 19.5v.5a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h8.5L18 5.5"/><path d="M8 18h1"/><path d="M18.42 9.61a2.1 2.1 0 1 1 2.97 2.97L16.95 17 13 18l.99-3.95 4.43-4.44Z"/>"#
            }
            ServiceIcon::ClipboardList => {
                r#"<rect width="8" height="4" x="8" y="2" rx="1"/><path d="M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2"/><path d="M12 11h4"/><path d="M12 16h4"/><path d="M8 11h.01"/><path d="M8 16h.01"/>"#
            }
            ServiceIcon::GraduationCap => {
                r#"<path d="M22 10 12 5 2 10l10 5 10-5z"/><path d="M6 12v5c3 3 9 3 12 0v-5"/>"#
            }
            ServiceIcon::FileSearch => {
                r#"<path d="M14 2v4a2 2 0 0 0 2 2h4"/><path d="M4.27 21.7A2 2 0 0 0 6 22h12a2 2 0 0 0 2-2V7l-5-5H6a2 2 0 0 0-2 2v3"/><circle cx="5" cy="14" r="3"/><path d="m9 18-1.5-1.5"/>"#
            }
            ServiceIcon::MessageSquare => {
                r#"<path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/>"#
            }
            ServiceIcon::Briefcase => {
                r#"<path d="M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/><rect width="20" height="14" x="2" y="6" rx="2"/>"#
            }
        };
        svg(paths)
    }
}

/// Icons used by the hero highlights and about cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HighlightIcon {
    ShieldCheck,
    TrendingUp,
    Lock,
    Globe,
    Shield,
    Target,
}

impl HighlightIcon {
    pub fn svg(self) -> String {
        let paths = match self {
            HighlightIcon::ShieldCheck => return ServiceIcon::ShieldCheck.svg(),
            HighlightIcon::TrendingUp => {
                r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17"/><polyline points="16 7 22 7 22 13"/>"#
            }
            HighlightIcon::Lock => {
                r#"<rect width="18" height="11" x="3" y="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#
            }
            HighlightIcon::Globe => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#
            }
            HighlightIcon::Shield => {
                r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#
            }
            HighlightIcon::Target => {
                r#"<circle cx="12" cy="12" r="10"/><circle cx="12" cy="12" r="6"/><circle cx="12" cy="12" r="2"/>"#
            }
        };
        svg(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_icon_follows_extension() {
        assert_eq!(FileIcon::for_filename("photo.PNG"), FileIcon::Image);
        assert_eq!(FileIcon::for_filename("report.pdf"), FileIcon::Document);
    }

    #[test]
    fn test_icons_are_distinct_svgs() {
        let image = FileIcon::Image.svg();
        let doc = FileIcon::Document.svg();
        assert!(image.starts_with("<svg"));
        assert!(image.ends_with("</svg>"));
        assert_ne!(image, doc);
        assert_eq!(HighlightIcon::ShieldCheck.svg(), ServiceIcon::ShieldCheck.svg());
    }
}
