//! Carousel discovery and event wiring.
//!
//! Markup contract: a `.carousel-btn-prev` button with `data-carousel="<kind>"`, a
//! `.carousel-btn-next` sibling inside the same parent, and a `<kind>Track` element
//! holding `.carousel-card` items.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, TouchEvent};
use zoon::{eprintln, println, window};

use super::dom::{element_by_id, html_elements, listen, query_all, viewport_width};
use crate::carousel::{Carousel, SlideDirection};
use crate::config::CarouselConfig;
use crate::error::SetupError;

pub const PREV_SELECTOR: &str = ".carousel-btn-prev";
pub const NEXT_SELECTOR: &str = ".carousel-btn-next";
pub const CARD_SELECTOR: &str = ".carousel-card";
pub const KIND_ATTRIBUTE: &str = "data-carousel";

pub type SharedCarousel = Rc<RefCell<Carousel<HtmlElement>>>;

/// Installs one carousel per previous-button whose track exists. Returns the installed
/// carousels; buttons without a track are skipped.
pub fn install_all(config: &CarouselConfig) -> Vec<SharedCarousel> {
    let previous_buttons = match query_all(PREV_SELECTOR) {
        Ok(buttons) => buttons,
        Err(error) => {
            eprintln!("[Carousel] {error}");
            return Vec::new();
        }
    };
    let mut carousels = Vec::new();
    for previous in previous_buttons {
        let kind = previous.get_attribute(KIND_ATTRIBUTE).unwrap_or_default();
        let track_id = format!("{kind}Track");
        let Ok(track) = element_by_id(&track_id) else {
            continue;
        };
        let next = next_button(&previous);
        match install(track, Some(previous), next, config.clone()) {
            Ok(carousel) => carousels.push(carousel),
            Err(error) => eprintln!("[Carousel] {track_id}: {error}"),
        }
    }
    carousels
}

fn next_button(previous: &HtmlElement) -> Option<HtmlElement> {
    previous
        .parent_element()?
        .query_selector(NEXT_SELECTOR)
        .ok()??
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Wires a single carousel. Buttons are only bound when both are present.
pub fn install(
    track: HtmlElement,
    previous: Option<HtmlElement>,
    next: Option<HtmlElement>,
    config: CarouselConfig,
) -> Result<SharedCarousel, SetupError> {
    let item_count = html_elements(track.query_selector_all(CARD_SELECTOR)?).len();
    let carousel = Rc::new(RefCell::new(Carousel::new(
        track.clone(),
        item_count,
        viewport_width(),
        config,
    )));

    if let (Some(previous), Some(next)) = (previous, next) {
        bind_button(&previous, &carousel, SlideDirection::Previous)?;
        bind_button(&next, &carousel, SlideDirection::Next)?;
    }

    listen(&window(), "resize", false, {
        let carousel = carousel.clone();
        move |_| carousel.borrow_mut().resize(viewport_width())
    })?;

    listen(&track, "touchstart", true, {
        let carousel = carousel.clone();
        move |event| {
            if let Some(x) = touch_x(&event) {
                carousel.borrow_mut().touch_start(x);
            }
        }
    })?;
    listen(&track, "touchmove", true, {
        let carousel = carousel.clone();
        move |event| {
            if let Some(x) = touch_x(&event) {
                carousel.borrow_mut().touch_move(x);
            }
        }
    })?;
    listen(&track, "touchend", false, {
        let carousel = carousel.clone();
        move |_| carousel.borrow_mut().touch_end()
    })?;

    println!("[Carousel] #{} with {item_count} items", track.id());
    Ok(carousel)
}

fn bind_button(
    button: &HtmlElement,
    carousel: &SharedCarousel,
    direction: SlideDirection,
) -> Result<(), SetupError> {
    let carousel = carousel.clone();
    listen(button, "click", false, move |_| {
        carousel.borrow_mut().slide(direction)
    })
}

/// Client X of the first active touch point.
fn touch_x(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(f64::from(touch.client_x()))
}
