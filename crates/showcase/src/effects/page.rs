//! Whole-page fade-in once loading completes.

use crate::dom::StyleTarget;

pub const FADE_TRANSITION: &str = "opacity 0.5s ease";

pub struct PageFade<T> {
    body: T,
}

impl<T: StyleTarget> PageFade<T> {
    /// Hides the body immediately.
    pub fn hide(body: T) -> Self {
        body.set_style("opacity", "0");
        Self { body }
    }

    /// Window `load` handler.
    pub fn show(&self) {
        self.body.set_style("opacity", "1");
        self.body.set_style("transition", FADE_TRANSITION);
    }
}
