//! Presentation effects for the marketing site.
//!
//! Pure controllers (carousel, navigation, reveal, parallax, tilt, title letters,
//! anchors, page fade, reduced motion) write through the [`dom::StyleTarget`] trait.
//! `platform::browser` binds them to the live document.

pub mod carousel;
pub mod config;
pub mod dom;
pub mod effects;
pub mod error;
pub mod frame;
pub mod platform;

pub use zoon;
