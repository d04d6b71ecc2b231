//! Event-to-style bindings around the carousel.
//!
//! Each controller owns its state and element handles; the browser layer feeds it
//! events and, for scroll-driven ones, animation frames.

pub mod anchor;
pub mod motion;
pub mod nav;
pub mod page;
pub mod parallax;
pub mod reveal;
pub mod tilt;
pub mod title;

pub use anchor::AnchorScroll;
pub use motion::MotionPreference;
pub use nav::NavBar;
pub use page::PageFade;
pub use parallax::Parallax;
pub use reveal::ScrollReveal;
pub use tilt::CardTilt;
pub use title::LetterAnimator;
