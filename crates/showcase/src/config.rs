//! Effect tuning.
//!
//! Every constant the controllers use lives here. Defaults reproduce the site's design;
//! a page can override any subset with an inline JSON block:
//!
//! ```html
//! <script id="showcase-config" type="application/json">
//!   { "carousel": { "swipe_threshold": 80 }, "anchor": { "offset": 64 } }
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// Id of the inline `<script>` element holding JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "showcase-config";

/// Easing curve shared by carousel, reveal and title animations.
pub const EASE_OUT_EXPO: &str = "cubic-bezier(0.16, 1, 0.3, 1)";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Shown in the console banner.
    pub site_name: SiteName,
    pub carousel: CarouselConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub parallax: ParallaxConfig,
    pub tilt: TiltConfig,
    pub title: TitleConfig,
    pub anchor: AnchorConfig,
}

impl EffectsConfig {
    /// Parses JSON overrides on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteName(pub String);

impl Default for SiteName {
    fn default() -> Self {
        Self("FUKUOKA BASE".to_string())
    }
}

/// One step of the viewport-width → visible item count function.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Applies when the viewport is narrower than this width.
    pub max_width: f64,
    pub visible: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub item_width: f64,
    pub gap: f64,
    /// Minimum horizontal swipe distance in pixels.
    pub swipe_threshold: f64,
    /// Ascending by `max_width`; the first matching entry wins.
    pub breakpoints: Vec<Breakpoint>,
    /// Visible count above the last breakpoint.
    pub wide_visible: f64,
    pub transition: String,
    /// Clamp the current index against the new maximum after a resize.
    pub reclamp_on_resize: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_width: 350.,
            gap: 32.,
            swipe_threshold: 50.,
            breakpoints: vec![
                Breakpoint { max_width: 480., visible: 1. },
                Breakpoint { max_width: 768., visible: 1.5 },
                Breakpoint { max_width: 1024., visible: 2. },
            ],
            wide_visible: 3.,
            transition: format!("transform 0.6s {EASE_OUT_EXPO}"),
            reclamp_on_resize: false,
        }
    }
}

impl CarouselConfig {
    /// Pixel distance between two consecutive item positions.
    pub fn step(&self) -> f64 {
        self.item_width + self.gap
    }

    pub fn visible_count(&self, viewport_width: f64) -> f64 {
        self.breakpoints
            .iter()
            .find(|breakpoint| viewport_width < breakpoint.max_width)
            .map_or(self.wide_visible, |breakpoint| breakpoint.visible)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset after which the bar gets the `scrolled` class.
    pub scrolled_after: f64,
    pub logo_min_scale: f64,
    /// Scroll distance over which the logo shrinks by a factor of 1.
    pub logo_shrink_distance: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_after: 100.,
            logo_min_scale: 0.85,
            logo_shrink_distance: 1000.,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    pub threshold: f64,
    pub root_margin: String,
    pub offset: f64,
    pub duration_secs: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: [
                ".section-header",
                ".carousel-card",
                ".grid-card",
                ".spot-item",
                ".news-item",
            ]
            .map(String::from)
            .to_vec(),
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px".to_string(),
            offset: 30.,
            duration_secs: 0.8,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub base_speed: f64,
    /// Added per layer index.
    pub speed_step: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            base_speed: 0.5,
            speed_step: 0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    /// Tilt is installed only on viewports wider than this.
    pub min_viewport_width: f64,
    pub selectors: Vec<String>,
    /// Pointer distance from the center, in pixels, per degree of rotation.
    pub pixels_per_degree: f64,
    pub perspective: f64,
    pub lift: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            min_viewport_width: 768.,
            selectors: [".carousel-card", ".grid-card", ".spot-item"]
                .map(String::from)
                .to_vec(),
            pixels_per_degree: 20.,
            perspective: 1000.,
            lift: 10.,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    pub duration_secs: f64,
    /// Delay added per character.
    pub stagger_secs: f64,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            duration_secs: 0.5,
            stagger_secs: 0.05,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    /// Height of the fixed navigation bar.
    pub offset: f64,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self { offset: 80. }
    }
}
