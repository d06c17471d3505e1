//! List helpers: tag badges and the page-link bar

use serde::Serialize;

/// Number of tag badges shown on a listing card
pub const MAX_CARD_TAGS: usize = 3;

/// Split a comma-separated tag list, trimming each entry.
///
/// Blank entries (e.g. from a trailing comma) are dropped.
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tag badges for a card: the first few tags plus an overflow count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagBadges {
    pub visible: Vec<String>,
    /// How many tags were left out, if any
    pub overflow: Option<usize>,
}

impl TagBadges {
    pub fn new(tags: &str, limit: usize) -> Option<Self> {
        let mut all = split_tags(tags);
        if all.is_empty() {
            return None;
        }
        let overflow = all.len().checked_sub(limit).filter(|n| *n > 0);
        all.truncate(limit);
        Some(Self {
            visible: all,
            overflow,
        })
    }

    /// Label of the overflow badge ("+2 more")
    pub fn more_label(&self) -> Option<String> {
        self.overflow.map(|n| format!("+{} more", n))
    }
}

/// A previous/next control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub href: String,
    /// Disabled links are rendered non-interactive
    pub disabled: bool,
}

/// A numbered page link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageNumber {
    pub number: u32,
    pub href: String,
    pub current: bool,
}

/// Previous / 1..=total / Next
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pager {
    pub prev: PageLink,
    pub pages: Vec<PageNumber>,
    pub next: PageLink,
}

/// Number of pages needed for `total_count` items
pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total_count.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Build the page-link bar.
///
/// `base_url` is joined with the page number, e.g. `/news/page/` + `3`.
/// Previous is disabled on page 1, Next once `current >= total`.
pub fn paginator(current: u32, total: u32, base_url: &str) -> Pager {
    let link = |page: u32| format!("{}{}", base_url, page);

    let prev = PageLink {
        href: link(current.saturating_sub(1).max(1)),
        disabled: current <= 1,
    };

    let next = PageLink {
        href: link(current.saturating_add(1)),
        disabled: current >= total,
    };

    let pages = (1..=total)
        .map(|page| PageNumber {
            number: page,
            href: link(page),
            current: page == current,
        })
        .collect();

    Pager { prev, pages, next }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags(" AML , KYC,PEP "), vec!["AML", "KYC", "PEP"]);
        assert_eq!(split_tags("a,,b,"), vec!["a", "b"]);
        assert!(split_tags(" ").is_empty());
    }

    #[test]
    fn test_tag_badges_overflow() {
        let badges = TagBadges::new("a, b, c, d", MAX_CARD_TAGS).unwrap();
        assert_eq!(badges.visible, vec!["a", "b", "c"]);
        assert_eq!(badges.overflow, Some(1));
        assert_eq!(badges.more_label().as_deref(), Some("+1 more"));
    }

    #[test]
    fn test_tag_badges_trailing_comma_not_counted() {
        let badges = TagBadges::new("a,b,c,d,", MAX_CARD_TAGS).unwrap();
        assert_eq!(badges.visible, vec!["a", "b", "c"]);
        assert_eq!(badges.more_label().as_deref(), Some("+1 more"));
    }

    #[test]
    fn test_tag_badges_without_overflow() {
        let badges = TagBadges::new("a, b, c", MAX_CARD_TAGS).unwrap();
        assert_eq!(badges.visible.len(), 3);
        assert_eq!(badges.overflow, None);
        assert_eq!(badges.more_label(), None);
        assert!(TagBadges::new("", MAX_CARD_TAGS).is_none());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(25, 12), 3);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_paginator_first_page() {
        let pager = paginator(1, 3, "/news/page/");
        assert!(pager.prev.disabled);
        assert!(!pager.next.disabled);
        assert_eq!(pager.next.href, "/news/page/2");
        assert_eq!(pager.pages.len(), 3);
        assert!(pager.pages[0].current);
        assert!(!pager.pages[1].current);
    }

    #[test]
    fn test_paginator_last_page() {
        let pager = paginator(3, 3, "/news/page/");
        assert!(!pager.prev.disabled);
        assert_eq!(pager.prev.href, "/news/page/2");
        assert!(pager.next.disabled);
        assert!(pager.pages[2].current);
    }

    #[test]
    fn test_paginator_past_the_end() {
        let pager = paginator(7, 3, "/news/page/");
        assert!(pager.next.disabled);
        assert!(!pager.prev.disabled);
        assert!(pager.pages.iter().all(|p| !p.current));
    }

    #[test]
    fn test_paginator_single_page() {
        let pager = paginator(1, 1, "/news/page/");
        assert!(pager.prev.disabled);
        assert!(pager.next.disabled);
        assert_eq!(pager.pages.len(), 1);
    }

    #[test]
    fn test_paginator_disabled_iff() {
        for total in 0..5u32 {
            for current in 1..7u32 {
                let pager = paginator(current, total, "/p/");
                assert_eq!(pager.prev.disabled, current == 1);
                assert_eq!(pager.next.disabled, current >= total);
                assert_eq!(pager.pages.len(), total as usize);
            }
        }
    }
}
