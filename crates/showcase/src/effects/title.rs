//! Hero title revealed one character at a time.

use crate::config::{EASE_OUT_EXPO, TitleConfig};
use crate::dom::StyleTarget;

pub const TITLE_SELECTOR: &str = ".hero-title-main";
pub const SOURCE_ATTRIBUTE: &str = "data-text";
pub const KEYFRAMES_NAME: &str = "fadeInChar";

pub const KEYFRAMES_CSS: &str = "
    @keyframes fadeInChar {
        from {
            opacity: 0;
            transform: translateY(20px) rotateX(-90deg);
        }
        to {
            opacity: 1;
            transform: translateY(0) rotateX(0);
        }
    }
";

/// One character of the title and its staggered animation.
#[derive(Clone, Debug, PartialEq)]
pub struct Letter {
    pub text: String,
    pub animation: String,
}

impl Letter {
    pub fn apply(&self, span: &impl StyleTarget) {
        span.set_style("display", "inline-block");
        span.set_style("opacity", "0");
        span.set_style("animation", &self.animation);
    }
}

#[derive(Clone, Debug)]
pub struct LetterAnimator {
    config: TitleConfig,
}

impl LetterAnimator {
    pub fn new(config: TitleConfig) -> Self {
        Self { config }
    }

    pub fn animation(&self, index: usize) -> String {
        let delay = index as f64 * self.config.stagger_secs;
        format!(
            "{KEYFRAMES_NAME} {}s {EASE_OUT_EXPO} {delay}s forwards",
            self.config.duration_secs
        )
    }

    /// Splits on `char`s, so spaces keep their own (invisible) slot in the stagger.
    pub fn letters(&self, text: &str) -> Vec<Letter> {
        text.chars()
            .enumerate()
            .map(|(index, character)| Letter {
                text: character.to_string(),
                animation: self.animation(index),
            })
            .collect()
    }
}
