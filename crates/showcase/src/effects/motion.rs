//! Reduced-motion accessibility fallback.

use crate::dom::StyleTarget;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    /// From the result of matching [`REDUCED_MOTION_QUERY`].
    pub fn from_media_match(matches: bool) -> Self {
        if matches { Self::Reduced } else { Self::Full }
    }

    pub fn is_reduced(self) -> bool {
        self == Self::Reduced
    }

    /// Strips animations and transitions when motion is reduced.
    /// Returns how many elements were touched.
    pub fn suppress_all<T: StyleTarget>(self, elements: impl IntoIterator<Item = T>) -> usize {
        if !self.is_reduced() {
            return 0;
        }
        let mut suppressed = 0;
        for element in elements {
            element.set_style("animation", "none");
            element.set_style("transition", "none");
            suppressed += 1;
        }
        suppressed
    }
}
