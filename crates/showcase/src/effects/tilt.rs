//! 3D tilt of cards following the pointer (desktop only).

use crate::config::TiltConfig;
use crate::dom::{Rect, StyleTarget, css_number};

#[derive(Clone, Debug)]
pub struct CardTilt {
    config: TiltConfig,
}

impl CardTilt {
    /// `None` on viewports too narrow for hover effects.
    pub fn for_viewport(viewport_width: f64, config: TiltConfig) -> Option<Self> {
        (viewport_width > config.min_viewport_width).then_some(Self { config })
    }

    pub fn selector(&self) -> String {
        self.config.selectors.join(", ")
    }

    /// Rotation around the X and Y axes in degrees for a pointer at client coordinates.
    pub fn angles(&self, client_x: f64, client_y: f64, rect: Rect) -> (f64, f64) {
        let x = client_x - rect.left;
        let y = client_y - rect.top;
        let center_x = rect.width / 2.;
        let center_y = rect.height / 2.;
        let rotate_x = (y - center_y) / self.config.pixels_per_degree;
        let rotate_y = (center_x - x) / self.config.pixels_per_degree;
        (css_number(rotate_x), css_number(rotate_y))
    }

    pub fn transform(&self, client_x: f64, client_y: f64, rect: Rect) -> String {
        let (rotate_x, rotate_y) = self.angles(client_x, client_y, rect);
        format!(
            "perspective({}px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) translateY(-{}px)",
            self.config.perspective, self.config.lift,
        )
    }

    pub fn on_pointer_move(
        &self,
        card: &impl StyleTarget,
        client_x: f64,
        client_y: f64,
        rect: Rect,
    ) {
        card.set_style("transform", &self.transform(client_x, client_y, rect));
    }

    pub fn on_pointer_leave(&self, card: &impl StyleTarget) {
        card.set_style("transform", "");
    }
}
