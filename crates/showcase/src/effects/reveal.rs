//! Fade-and-rise of content blocks as they enter the viewport.

use crate::config::{EASE_OUT_EXPO, RevealConfig};
use crate::dom::StyleTarget;

#[derive(Clone, Debug)]
pub struct ScrollReveal {
    config: RevealConfig,
}

impl ScrollReveal {
    pub fn new(config: RevealConfig) -> Self {
        Self { config }
    }

    /// Comma-joined selector for all reveal targets.
    pub fn selector(&self) -> String {
        self.config.selectors.join(", ")
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    pub fn root_margin(&self) -> &str {
        &self.config.root_margin
    }

    pub fn transition(&self) -> String {
        let duration = self.config.duration_secs;
        format!(
            "opacity {duration}s {EASE_OUT_EXPO}, transform {duration}s {EASE_OUT_EXPO}"
        )
    }

    /// Puts an element into its hidden starting state.
    pub fn prepare(&self, element: &impl StyleTarget) {
        element.set_style("opacity", "0");
        element.set_style(
            "transform",
            &format!("translateY({}px)", self.config.offset),
        );
        element.set_style("transition", &self.transition());
    }

    /// Revealed elements stay revealed when they leave the viewport again.
    pub fn on_intersection(&self, element: &impl StyleTarget, is_intersecting: bool) {
        if is_intersecting {
            element.set_style("opacity", "1");
            element.set_style("transform", "translateY(0)");
        }
    }
}
