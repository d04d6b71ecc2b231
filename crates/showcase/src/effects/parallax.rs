//! Hero background layers drifting at increasing speeds.

use crate::config::ParallaxConfig;
use crate::dom::{StyleTarget, css_number};
use crate::frame::FrameGate;

pub struct Parallax<T> {
    layers: Vec<T>,
    scroll_y: f64,
    frame: FrameGate,
    config: ParallaxConfig,
}

impl<T: StyleTarget> Parallax<T> {
    pub fn new(layers: Vec<T>, config: ParallaxConfig) -> Self {
        Self {
            layers,
            scroll_y: 0.,
            frame: FrameGate::new(),
            config,
        }
    }

    /// Returns `true` when a frame has to be scheduled.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.scroll_y = scroll_y;
        self.frame.request()
    }

    pub fn speed(&self, layer: usize) -> f64 {
        self.config.base_speed + layer as f64 * self.config.speed_step
    }

    pub fn layer_offset(&self, layer: usize) -> f64 {
        css_number(-(self.scroll_y * self.speed(layer)))
    }

    pub fn apply_frame(&self) {
        for (index, layer) in self.layers.iter().enumerate() {
            layer.set_style(
                "transform",
                &format!("translateY({}px)", self.layer_offset(index)),
            );
        }
        self.frame.release();
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
