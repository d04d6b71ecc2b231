//! Card tilt on pointer hover.

use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use super::dom::{listen, query_all, viewport_width};
use crate::config::TiltConfig;
use crate::dom::Rect;
use crate::effects::CardTilt;
use crate::error::SetupError;

/// Returns the number of tilting cards; zero on narrow viewports.
pub fn install_tilt(config: TiltConfig) -> Result<usize, SetupError> {
    let Some(tilt) = CardTilt::for_viewport(viewport_width(), config) else {
        return Ok(0);
    };
    let cards = query_all(&tilt.selector())?;
    for card in &cards {
        listen(card, "mousemove", false, {
            let tilt = tilt.clone();
            let card = card.clone();
            move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let bounds = card.get_bounding_client_rect();
                let rect = Rect::new(bounds.x(), bounds.y(), bounds.width(), bounds.height());
                tilt.on_pointer_move(
                    &card,
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    rect,
                );
            }
        })?;
        listen(card, "mouseleave", false, {
            let tilt = tilt.clone();
            let card = card.clone();
            move |_| tilt.on_pointer_leave(&card)
        })?;
    }
    Ok(cards.len())
}
