//! Navigation bar wiring: `#nav`, `#navLogo`, `#navToggle`, `#navMenu`.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;
use zoon::window;

use super::dom::{body, element_by_id, html_elements, listen, request_frame, scroll_y};
use crate::config::NavConfig;
use crate::effects::NavBar;
use crate::error::SetupError;

pub type SharedNavBar = Rc<RefCell<NavBar<HtmlElement>>>;

pub fn install(config: NavConfig) -> Result<SharedNavBar, SetupError> {
    let toggle = element_by_id("navToggle")?;
    let menu = element_by_id("navMenu")?;
    let links = html_elements(menu.query_selector_all("a")?);
    let nav_bar = Rc::new(RefCell::new(NavBar::new(
        element_by_id("nav")?,
        element_by_id("navLogo")?,
        toggle.clone(),
        menu,
        body()?,
        config,
    )));

    listen(&toggle, "click", false, {
        let nav_bar = nav_bar.clone();
        move |_| nav_bar.borrow().toggle_menu()
    })?;

    for link in links {
        let nav_bar = nav_bar.clone();
        listen(&link, "click", false, move |_| nav_bar.borrow().close_menu())?;
    }

    listen(&window(), "scroll", true, {
        let nav_bar = nav_bar.clone();
        move |_| {
            if nav_bar.borrow_mut().on_scroll(scroll_y()) {
                let nav_bar = nav_bar.clone();
                request_frame(move || nav_bar.borrow().apply_frame());
            }
        }
    })?;

    Ok(nav_bar)
}
