//! `web_sys` glue: `StyleTarget` for live elements, queries, listeners, frames.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget, HtmlElement, NodeList};
use zoon::{document, eprintln, window};

use crate::dom::StyleTarget;
use crate::error::SetupError;

impl StyleTarget for HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        let _ = self.style().set_property(property, value);
    }

    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.class_list().toggle(class).unwrap_or(false)
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

/// HTML elements of a node list, in document order. Non-HTML nodes (SVG, text) are skipped.
pub fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn query_all(selector: &str) -> Result<Vec<HtmlElement>, SetupError> {
    Ok(html_elements(document().query_selector_all(selector)?))
}

pub(super) fn element_by_id(id: &str) -> Result<HtmlElement, SetupError> {
    document()
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| SetupError::MissingElement(format!("#{id}")))
}

pub fn body() -> Result<HtmlElement, SetupError> {
    document()
        .body()
        .ok_or_else(|| SetupError::MissingElement("body".to_string()))
}

pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or_default()
}

pub(super) fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Registers a listener for the lifetime of the page.
pub(super) fn listen(
    target: &EventTarget,
    event: &str,
    passive: bool,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), SetupError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    // Page-lifetime listener; there is no teardown.
    closure.forget();
    Ok(())
}

/// Runs `callback` before the next repaint.
pub(super) fn request_frame(callback: impl FnOnce() + 'static) {
    let closure = Closure::once_into_js(callback);
    if let Err(error) = window().request_animation_frame(closure.unchecked_ref()) {
        eprintln!("[Showcase] requestAnimationFrame failed: {error:?}");
    }
}
