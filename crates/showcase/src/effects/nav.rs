//! Navigation bar: scrolled state, shrinking logo and the mobile menu.

use crate::config::NavConfig;
use crate::dom::StyleTarget;
use crate::frame::FrameGate;

pub const SCROLLED_CLASS: &str = "scrolled";
pub const ACTIVE_CLASS: &str = "active";

pub struct NavBar<T> {
    nav: T,
    logo: T,
    toggle: T,
    menu: T,
    body: T,
    scroll_y: f64,
    frame: FrameGate,
    config: NavConfig,
}

impl<T: StyleTarget> NavBar<T> {
    pub fn new(nav: T, logo: T, toggle: T, menu: T, body: T, config: NavConfig) -> Self {
        Self {
            nav,
            logo,
            toggle,
            menu,
            body,
            scroll_y: 0.,
            frame: FrameGate::new(),
            config,
        }
    }

    /// Records the scroll position. Returns `true` when the caller has to schedule
    /// [`Self::apply_frame`] for the next animation frame.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.scroll_y = scroll_y;
        self.frame.request()
    }

    pub fn apply_frame(&self) {
        if self.scroll_y > self.config.scrolled_after {
            self.nav.add_class(SCROLLED_CLASS);
        } else {
            self.nav.remove_class(SCROLLED_CLASS);
        }
        self.logo
            .set_style("transform", &format!("scale({})", self.logo_scale()));
        self.frame.release();
    }

    pub fn logo_scale(&self) -> f64 {
        (1. - self.scroll_y / self.config.logo_shrink_distance).max(self.config.logo_min_scale)
    }

    pub fn toggle_menu(&self) {
        self.toggle.toggle_class(ACTIVE_CLASS);
        let open = self.menu.toggle_class(ACTIVE_CLASS);
        self.body
            .set_style("overflow", if open { "hidden" } else { "" });
    }

    pub fn close_menu(&self) {
        self.toggle.remove_class(ACTIVE_CLASS);
        self.menu.remove_class(ACTIVE_CLASS);
        self.body.set_style("overflow", "");
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.has_class(ACTIVE_CLASS)
    }

    pub fn frame_pending(&self) -> bool {
        self.frame.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::MemoryElement;
    use std::rc::Rc;

    struct Fixture {
        nav: Rc<MemoryElement>,
        logo: Rc<MemoryElement>,
        toggle: Rc<MemoryElement>,
        menu: Rc<MemoryElement>,
        body: Rc<MemoryElement>,
    }

    fn nav_bar() -> (NavBar<Rc<MemoryElement>>, Fixture) {
        let fixture = Fixture {
            nav: Rc::new(MemoryElement::new()),
            logo: Rc::new(MemoryElement::new()),
            toggle: Rc::new(MemoryElement::new()),
            menu: Rc::new(MemoryElement::new()),
            body: Rc::new(MemoryElement::new()),
        };
        let nav_bar = NavBar::new(
            fixture.nav.clone(),
            fixture.logo.clone(),
            fixture.toggle.clone(),
            fixture.menu.clone(),
            fixture.body.clone(),
            NavConfig::default(),
        );
        (nav_bar, fixture)
    }

    #[test]
    fn scrolled_class_follows_threshold() {
        let (mut nav_bar, fixture) = nav_bar();
        assert!(nav_bar.on_scroll(101.));
        nav_bar.apply_frame();
        assert!(fixture.nav.has_class(SCROLLED_CLASS));

        assert!(nav_bar.on_scroll(100.));
        nav_bar.apply_frame();
        assert!(!fixture.nav.has_class(SCROLLED_CLASS));
    }

    #[test]
    fn logo_scale_shrinks_to_floor() {
        let (mut nav_bar, fixture) = nav_bar();
        nav_bar.on_scroll(0.);
        nav_bar.apply_frame();
        assert_eq!(fixture.logo.style("transform").as_deref(), Some("scale(1)"));

        nav_bar.on_scroll(100.);
        nav_bar.apply_frame();
        assert_eq!(fixture.logo.style("transform").as_deref(), Some("scale(0.9)"));

        nav_bar.on_scroll(5000.);
        nav_bar.apply_frame();
        assert_eq!(fixture.logo.style("transform").as_deref(), Some("scale(0.85)"));
    }

    #[test]
    fn scroll_burst_schedules_one_frame_with_latest_position() {
        let (mut nav_bar, fixture) = nav_bar();
        assert!(nav_bar.on_scroll(10.));
        assert!(!nav_bar.on_scroll(50.));
        assert!(!nav_bar.on_scroll(150.));
        assert!(nav_bar.frame_pending());

        nav_bar.apply_frame();
        assert!(!nav_bar.frame_pending());
        assert!(fixture.nav.has_class(SCROLLED_CLASS));
        assert_eq!(fixture.logo.writes_of("transform"), vec!["scale(0.85)"]);
    }

    #[test]
    fn menu_toggle_locks_body_scroll() {
        let (nav_bar, fixture) = nav_bar();
        nav_bar.toggle_menu();
        assert!(nav_bar.is_menu_open());
        assert!(fixture.toggle.has_class(ACTIVE_CLASS));
        assert_eq!(fixture.body.style("overflow").as_deref(), Some("hidden"));

        nav_bar.toggle_menu();
        assert!(!nav_bar.is_menu_open());
        assert!(!fixture.toggle.has_class(ACTIVE_CLASS));
        assert_eq!(fixture.body.style("overflow"), None);
    }

    #[test]
    fn menu_link_closes_menu() {
        let (nav_bar, fixture) = nav_bar();
        nav_bar.toggle_menu();
        nav_bar.close_menu();
        assert!(!nav_bar.is_menu_open());
        assert!(!fixture.toggle.has_class(ACTIVE_CLASS));
        assert_eq!(fixture.body.style("overflow"), None);
    }
}
