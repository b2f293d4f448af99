//! Sidebar active-link matching.

use crate::path::{normalize_path, resolve_href};
use url::Url;

/// Which sidebar link to mark active.
///
/// Applying it means: clear the active class from every candidate link, then
/// add it to `links[active]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavUpdate {
    pub active: usize,
}

impl NavUpdate {
    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }
}

/// Only anchors take part in matching; other elements caught by the nav
/// selector are ignored.
pub fn is_nav_anchor(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("a")
}

/// Pick the sidebar link matching `current_path`.
///
/// Links are scanned in document order. An exact path match returns at once;
/// otherwise the first link whose non-root path prefixes the current path is
/// kept. `None` means nothing matched and the DOM must be left alone, so any
/// server-rendered marking survives.
pub fn match_nav<I, S>(current_path: &str, hrefs: I, origin: &Url) -> Option<NavUpdate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let current = normalize_path(current_path);
    let mut matched = None;

    for (index, href) in hrefs.into_iter().enumerate() {
        let Some(url) = resolve_href(href.as_ref(), origin) else {
            continue;
        };
        let link_path = normalize_path(url.path());

        if link_path == current {
            return Some(NavUpdate { active: index });
        }
        if matched.is_none() && link_path != "/" && current.starts_with(link_path) {
            matched = Some(index);
        }
    }

    matched.map(|active| NavUpdate { active })
}
