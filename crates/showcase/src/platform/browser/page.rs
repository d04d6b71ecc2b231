//! Page startup: config, every effect, load fade-in, reduced motion, console banner.

use zoon::{document, eprintln, println, window};

use super::dom::{body, listen, query_all};
use super::{carousel, nav, pointer, scroll, title};
use crate::config::{CONFIG_ELEMENT_ID, EffectsConfig};
use crate::effects::PageFade;
use crate::effects::motion::{MotionPreference, REDUCED_MOTION_QUERY};
use crate::error::SetupError;

/// Reads overrides from the inline config block; defaults when absent or invalid.
pub fn load_config() -> EffectsConfig {
    let Some(element) = document().get_element_by_id(CONFIG_ELEMENT_ID) else {
        return EffectsConfig::default();
    };
    let json = element.text_content().unwrap_or_default();
    EffectsConfig::from_json(&json).unwrap_or_else(|error| {
        eprintln!("[Showcase] {error}; using defaults");
        EffectsConfig::default()
    })
}

/// Logs a failed effect and carries on without it.
fn report<T: Default>(effect: &str, result: Result<T, SetupError>) -> T {
    result.unwrap_or_else(|error| {
        eprintln!("[Showcase] {effect} disabled: {error}");
        T::default()
    })
}

pub fn start() {
    let config = load_config();

    report("navigation", nav::install(config.nav.clone()).map(drop));
    let carousels = carousel::install_all(&config.carousel);
    let animated = report("scroll reveal", scroll::install_reveal(config.reveal.clone()));
    report("parallax", scroll::install_parallax(config.parallax.clone()));
    report("card tilt", pointer::install_tilt(config.tilt.clone()));
    report("hero title", title::install_title(config.title.clone()));
    report("keyframes", title::inject_keyframes());
    report("anchors", scroll::install_anchors(config.anchor.clone()));
    report("page fade", install_page_fade());
    report("reduced motion", apply_motion_preference());

    println!("🏯 {}", config.site_name.0);
    println!("Website loaded successfully!");
    println!("Carousels initialized: {}", carousels.len());
    println!("Animated elements: {animated}");
}

/// Hides the body until `load`. A module started after `load` shows it right away.
fn install_page_fade() -> Result<(), SetupError> {
    let fade = PageFade::hide(body()?);
    if document().ready_state() == "complete" {
        fade.show();
        return Ok(());
    }
    listen(&window(), "load", false, move |_| fade.show())
}

fn motion_preference() -> Result<MotionPreference, SetupError> {
    let matches = window()
        .match_media(REDUCED_MOTION_QUERY)?
        .is_some_and(|query| query.matches());
    Ok(MotionPreference::from_media_match(matches))
}

fn apply_motion_preference() -> Result<(), SetupError> {
    let preference = motion_preference()?;
    if preference.is_reduced() {
        let suppressed = preference.suppress_all(query_all("*")?);
        println!("[Showcase] reduced motion: {suppressed} elements without animation");
    }
    Ok(())
}
