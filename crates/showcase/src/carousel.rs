//! Horizontally sliding item track.
//!
//! The track moves by whole item steps in response to prev/next buttons and
//! horizontal swipes. Only the track's `transform` and `transition` are written.

use crate::config::CarouselConfig;
use crate::dom::{StyleTarget, css_number};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    Previous,
    Next,
}

impl SlideDirection {
    pub fn step(self) -> f64 {
        match self {
            Self::Previous => -1.,
            Self::Next => 1.,
        }
    }
}

/// Per-gesture touch tracking: `Idle → Dragging → Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SwipeGesture {
    #[default]
    Idle,
    Dragging { start_x: f64, current_x: f64 },
}

impl SwipeGesture {
    pub fn start(&mut self, x: f64) {
        *self = Self::Dragging {
            start_x: x,
            current_x: x,
        };
    }

    /// Ignored unless a gesture is in progress.
    pub fn track(&mut self, x: f64) {
        if let Self::Dragging { current_x, .. } = self {
            *current_x = x;
        }
    }

    /// Ends the gesture. Returns the slide the swipe asks for, if it travelled more than
    /// `threshold` pixels.
    pub fn finish(&mut self, threshold: f64) -> Option<SlideDirection> {
        let Self::Dragging { start_x, current_x } = std::mem::take(self) else {
            return None;
        };
        let diff = start_x - current_x;
        if diff.abs() <= threshold {
            return None;
        }
        Some(if diff > 0. {
            SlideDirection::Next
        } else {
            SlideDirection::Previous
        })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

pub struct Carousel<T> {
    track: T,
    item_count: usize,
    /// Fractional when the visible count is, so the last partial item can be reached.
    current_index: f64,
    visible_count: f64,
    gesture: SwipeGesture,
    config: CarouselConfig,
}

impl<T: StyleTarget> Carousel<T> {
    pub fn new(track: T, item_count: usize, viewport_width: f64, config: CarouselConfig) -> Self {
        let visible_count = config.visible_count(viewport_width);
        Self {
            track,
            item_count,
            current_index: 0.,
            visible_count,
            gesture: SwipeGesture::Idle,
            config,
        }
    }

    pub fn current_index(&self) -> f64 {
        self.current_index
    }

    pub fn visible_count(&self) -> f64 {
        self.visible_count
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn max_index(&self) -> f64 {
        (self.item_count as f64 - self.visible_count).max(0.)
    }

    pub fn track(&self) -> &T {
        &self.track
    }

    pub fn slide(&mut self, direction: SlideDirection) {
        let next = self.current_index + direction.step();
        self.current_index = next.min(self.max_index()).max(0.);
        self.update_position(true);
    }

    pub fn update_position(&self, animated: bool) {
        let offset = css_number(self.current_index * self.config.step());
        let transition = if animated {
            self.config.transition.as_str()
        } else {
            "none"
        };
        self.track.set_style("transition", transition);
        self.track
            .set_style("transform", &format!("translateX(-{offset}px)"));
    }

    /// The index is kept as is unless `reclamp_on_resize` is set, so a carousel scrolled
    /// to the end may show empty space after the viewport widens.
    pub fn resize(&mut self, viewport_width: f64) {
        self.visible_count = self.config.visible_count(viewport_width);
        if self.config.reclamp_on_resize {
            self.current_index = self.current_index.min(self.max_index());
        }
        self.update_position(false);
    }

    pub fn touch_start(&mut self, x: f64) {
        self.gesture.start(x);
    }

    pub fn touch_move(&mut self, x: f64) {
        self.gesture.track(x);
    }

    pub fn touch_end(&mut self) {
        if let Some(direction) = self.gesture.finish(self.config.swipe_threshold) {
            self.slide(direction);
        }
    }

    pub fn gesture(&self) -> SwipeGesture {
        self.gesture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::MemoryElement;
    use std::rc::Rc;

    const EASED: &str = "transform 0.6s cubic-bezier(0.16, 1, 0.3, 1)";

    fn fixture(items: usize, width: f64) -> (Carousel<Rc<MemoryElement>>, Rc<MemoryElement>) {
        let track = Rc::new(MemoryElement::new());
        let carousel = Carousel::new(track.clone(), items, width, CarouselConfig::default());
        (carousel, track)
    }

    #[test]
    fn slides_to_the_end_and_stops() {
        let (mut carousel, track) = fixture(6, 1280.);
        assert_eq!(carousel.max_index(), 3.);

        let mut indices = Vec::new();
        for _ in 0..4 {
            carousel.slide(SlideDirection::Next);
            indices.push(carousel.current_index());
        }
        assert_eq!(indices, vec![1., 2., 3., 3.]);
        assert_eq!(track.style("transform").as_deref(), Some("translateX(-1146px)"));
    }

    #[test]
    fn previous_at_start_is_noop_but_still_positions() {
        let (mut carousel, track) = fixture(6, 1280.);
        carousel.slide(SlideDirection::Previous);
        assert_eq!(carousel.current_index(), 0.);
        assert_eq!(track.writes_of("transform"), vec!["translateX(-0px)"]);
        assert_eq!(track.style("transition").as_deref(), Some(EASED));
    }

    #[test]
    fn index_stays_in_range_for_any_sequence() {
        for width in [320., 600., 900., 1280.] {
            let (mut carousel, _) = fixture(5, width);
            let pattern = [1, 1, -1, 1, 1, 1, 1, 1, -1, -1, -1, -1, -1, -1, 1, 1, 1];
            for step in pattern {
                let direction = if step > 0 {
                    SlideDirection::Next
                } else {
                    SlideDirection::Previous
                };
                carousel.slide(direction);
                assert!(carousel.current_index() >= 0.);
                assert!(carousel.current_index() <= carousel.max_index());
            }
        }
    }

    #[test]
    fn fewer_items_than_visible_never_moves() {
        let (mut carousel, track) = fixture(2, 1280.);
        assert_eq!(carousel.max_index(), 0.);
        carousel.slide(SlideDirection::Next);
        assert_eq!(carousel.current_index(), 0.);
        assert_eq!(track.style("transform").as_deref(), Some("translateX(-0px)"));
    }

    #[test]
    fn fractional_visible_count_reaches_last_partial_item() {
        let (mut carousel, track) = fixture(3, 600.);
        assert_eq!(carousel.visible_count(), 1.5);
        carousel.slide(SlideDirection::Next);
        carousel.slide(SlideDirection::Next);
        assert_eq!(carousel.current_index(), 1.5);
        assert_eq!(track.style("transform").as_deref(), Some("translateX(-573px)"));
    }

    #[test]
    fn update_position_transition_depends_on_animation() {
        let (carousel, track) = fixture(6, 1280.);
        carousel.update_position(false);
        assert_eq!(track.style("transition").as_deref(), Some("none"));
        carousel.update_position(true);
        assert_eq!(track.style("transition").as_deref(), Some(EASED));
    }

    #[test]
    fn resize_keeps_out_of_range_index() {
        let (mut carousel, track) = fixture(6, 1280.);
        for _ in 0..3 {
            carousel.slide(SlideDirection::Next);
        }
        carousel.resize(320.);
        assert_eq!(carousel.visible_count(), 1.);
        assert_eq!(carousel.max_index(), 5.);
        assert_eq!(carousel.current_index(), 3.);
        assert_eq!(track.style("transition").as_deref(), Some("none"));
        assert_eq!(track.style("transform").as_deref(), Some("translateX(-1146px)"));
    }

    #[test]
    fn resize_to_wider_viewport_does_not_reclamp_by_default() {
        let (mut carousel, track) = fixture(6, 320.);
        for _ in 0..5 {
            carousel.slide(SlideDirection::Next);
        }
        assert_eq!(carousel.current_index(), 5.);
        carousel.resize(1280.);
        assert_eq!(carousel.max_index(), 3.);
        assert_eq!(carousel.current_index(), 5.);
        assert_eq!(track.style("transform").as_deref(), Some("translateX(-1910px)"));
    }

    #[test]
    fn resize_reclamps_when_configured() {
        let track = Rc::new(MemoryElement::new());
        let config = CarouselConfig {
            reclamp_on_resize: true,
            ..CarouselConfig::default()
        };
        let mut carousel = Carousel::new(track.clone(), 6, 320., config);
        for _ in 0..5 {
            carousel.slide(SlideDirection::Next);
        }
        carousel.resize(1280.);
        assert_eq!(carousel.current_index(), 3.);
        assert_eq!(track.style("transform").as_deref(), Some("translateX(-1146px)"));
    }

    #[test]
    fn long_left_swipe_slides_next() {
        let (mut carousel, track) = fixture(6, 1280.);
        carousel.touch_start(300.);
        carousel.touch_move(250.);
        carousel.touch_move(200.);
        assert!(track.writes().is_empty());
        carousel.touch_end();
        assert_eq!(carousel.current_index(), 1.);
        assert_eq!(track.writes_of("transform").len(), 1);
        assert_eq!(carousel.gesture(), SwipeGesture::Idle);
    }

    #[test]
    fn long_right_swipe_slides_previous() {
        let (mut carousel, _) = fixture(6, 1280.);
        carousel.slide(SlideDirection::Next);
        carousel.touch_start(100.);
        carousel.touch_move(220.);
        carousel.touch_end();
        assert_eq!(carousel.current_index(), 0.);
    }

    #[test]
    fn short_swipe_does_nothing() {
        let (mut carousel, track) = fixture(6, 1280.);
        carousel.touch_start(300.);
        carousel.touch_move(270.);
        carousel.touch_end();
        assert_eq!(carousel.current_index(), 0.);
        assert!(track.writes().is_empty());
        assert!(!carousel.gesture().is_dragging());
    }

    #[test]
    fn swipe_of_exactly_threshold_does_nothing() {
        let (mut carousel, _) = fixture(6, 1280.);
        carousel.touch_start(300.);
        carousel.touch_move(250.);
        carousel.touch_end();
        assert_eq!(carousel.current_index(), 0.);
    }

    #[test]
    fn tap_without_move_does_not_reuse_previous_position() {
        let (mut carousel, _) = fixture(6, 1280.);
        carousel.touch_start(300.);
        carousel.touch_move(100.);
        carousel.touch_end();
        assert_eq!(carousel.current_index(), 1.);

        carousel.touch_start(400.);
        carousel.touch_end();
        assert_eq!(carousel.current_index(), 1.);
    }

    #[test]
    fn move_and_end_while_idle_are_ignored() {
        let (mut carousel, track) = fixture(6, 1280.);
        carousel.touch_move(10.);
        carousel.touch_end();
        assert_eq!(carousel.gesture(), SwipeGesture::Idle);
        assert!(track.writes().is_empty());
    }
}
