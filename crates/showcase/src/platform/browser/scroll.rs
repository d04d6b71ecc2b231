//! Scroll-driven effects: reveal on intersection, hero parallax, anchor smooth scroll.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::prelude::Closure;
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};
use zoon::{document, window};

use super::dom::{listen, query_all, request_frame, scroll_y};
use crate::config::{AnchorConfig, ParallaxConfig, RevealConfig};
use crate::effects::anchor::ANCHOR_SELECTOR;
use crate::effects::{AnchorScroll, Parallax, ScrollReveal};
use crate::error::SetupError;

pub const PARALLAX_SELECTOR: &str = ".hero-shape";

/// Hides every reveal target and observes it. Returns the number of targets.
pub fn install_reveal(config: RevealConfig) -> Result<usize, SetupError> {
    let reveal = ScrollReveal::new(config);
    let targets = query_all(&reveal.selector())?;

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(reveal.threshold()));
    options.set_root_margin(reveal.root_margin());

    let on_entries = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
        let reveal = reveal.clone();
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
                    reveal.on_intersection(&target, entry.is_intersecting());
                }
            }
        }
    });
    let observer =
        IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options)?;
    on_entries.forget();

    for target in &targets {
        reveal.prepare(target);
        observer.observe(target);
    }
    Ok(targets.len())
}

pub fn install_parallax(config: ParallaxConfig) -> Result<(), SetupError> {
    let parallax = Rc::new(RefCell::new(Parallax::new(
        query_all(PARALLAX_SELECTOR)?,
        config,
    )));
    if parallax.borrow().is_empty() {
        return Ok(());
    }
    listen(&window(), "scroll", true, move |_| {
        if parallax.borrow_mut().on_scroll(scroll_y()) {
            let parallax = parallax.clone();
            request_frame(move || parallax.borrow().apply_frame());
        }
    })
}

pub fn install_anchors(config: AnchorConfig) -> Result<usize, SetupError> {
    let anchor_scroll = AnchorScroll::new(config);
    let anchors = query_all(ANCHOR_SELECTOR)?;
    for anchor in &anchors {
        let anchor_scroll = anchor_scroll.clone();
        let href_source = anchor.clone();
        listen(anchor, "click", false, move |event| {
            event.prevent_default();
            let href = href_source.get_attribute("href").unwrap_or_default();
            if let Some(top) = target_top(&anchor_scroll, &href) {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window().scroll_to_with_scroll_to_options(&options);
            }
        })?;
    }
    Ok(anchors.len())
}

fn target_top(anchor_scroll: &AnchorScroll, href: &str) -> Option<f64> {
    let selector = anchor_scroll.target_selector(href)?;
    let target = document()
        .query_selector(selector)
        .ok()??
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(anchor_scroll.scroll_top(f64::from(target.offset_top())))
}
