//! Element abstraction shared by all controllers.
//!
//! Controllers never look elements up themselves; they receive handles implementing
//! [`StyleTarget`] and only write presentation attributes through it.

use std::rc::Rc;

/// A visual element whose inline style and class list can be written.
///
/// Methods take `&self` because DOM handles are shared references to mutable nodes.
pub trait StyleTarget {
    /// Sets an inline style property. An empty `value` removes the property.
    fn set_style(&self, property: &str, value: &str);

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    /// Toggles `class` and returns whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> bool;

    fn has_class(&self, class: &str) -> bool;
}

impl<T: StyleTarget + ?Sized> StyleTarget for &T {
    fn set_style(&self, property: &str, value: &str) {
        (**self).set_style(property, value)
    }

    fn add_class(&self, class: &str) {
        (**self).add_class(class)
    }

    fn remove_class(&self, class: &str) {
        (**self).remove_class(class)
    }

    fn toggle_class(&self, class: &str) -> bool {
        (**self).toggle_class(class)
    }

    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }
}

impl<T: StyleTarget + ?Sized> StyleTarget for Rc<T> {
    fn set_style(&self, property: &str, value: &str) {
        (**self).set_style(property, value)
    }

    fn add_class(&self, class: &str) {
        (**self).add_class(class)
    }

    fn remove_class(&self, class: &str) {
        (**self).remove_class(class)
    }

    fn toggle_class(&self, class: &str) -> bool {
        (**self).toggle_class(class)
    }

    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }
}

/// Viewport-relative bounding box of an element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// CSS numbers the way the browser prints them: `-0` collapses to `0`.
pub(crate) fn css_number(value: f64) -> f64 {
    value + 0.0
}
