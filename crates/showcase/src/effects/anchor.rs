//! Smooth scrolling to in-page anchors below the fixed navigation bar.

use crate::config::AnchorConfig;

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

#[derive(Clone, Debug)]
pub struct AnchorScroll {
    config: AnchorConfig,
}

impl AnchorScroll {
    pub fn new(config: AnchorConfig) -> Self {
        Self { config }
    }

    /// Selector for the anchor target, or `None` for a bare `#` (or non-fragment) href.
    pub fn target_selector<'a>(&self, href: &'a str) -> Option<&'a str> {
        href.strip_prefix('#')
            .filter(|fragment| !fragment.is_empty())
            .map(|_| href)
    }

    /// Document scroll position that puts the target just under the navigation bar.
    pub fn scroll_top(&self, target_offset_top: f64) -> f64 {
        target_offset_top - self.config.offset
    }
}
