//! Browser bindings.
//!
//! This is the only place that touches `web_sys`: element lookup, event listeners,
//! animation frames and observers. Controllers from `crate::carousel` and
//! `crate::effects` get their element handles from here.

mod dom;
pub use dom::{body, html_elements, query_all, viewport_width};

pub mod carousel;
pub mod nav;
pub mod pointer;
pub mod scroll;
pub mod title;

mod page;
pub use page::{load_config, start};
