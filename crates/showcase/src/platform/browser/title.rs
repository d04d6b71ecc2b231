//! Hero title letter animation and its keyframes rule.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use zoon::document;

use crate::config::TitleConfig;
use crate::effects::LetterAnimator;
use crate::effects::title::{KEYFRAMES_CSS, SOURCE_ATTRIBUTE, TITLE_SELECTOR};
use crate::error::SetupError;

/// Replaces the title's content with one animated span per character.
/// Returns the number of letters, or `None` when the page has no hero title.
pub fn install_title(config: TitleConfig) -> Result<Option<usize>, SetupError> {
    let Some(title) = document().query_selector(TITLE_SELECTOR)? else {
        return Ok(None);
    };
    let text = title
        .get_attribute(SOURCE_ATTRIBUTE)
        .ok_or_else(|| SetupError::MissingAttribute {
            element: TITLE_SELECTOR.to_string(),
            attribute: SOURCE_ATTRIBUTE.to_string(),
        })?;

    let letters = LetterAnimator::new(config).letters(&text);
    title.set_inner_html("");
    for letter in &letters {
        let span = document()
            .create_element("span")?
            .unchecked_into::<HtmlElement>();
        span.set_text_content(Some(&letter.text));
        letter.apply(&span);
        title.append_child(&span)?;
    }
    Ok(Some(letters.len()))
}

/// Appends the `@keyframes` rule used by the letters to `<head>`.
pub fn inject_keyframes() -> Result<(), SetupError> {
    let head = document()
        .head()
        .ok_or_else(|| SetupError::MissingElement("head".to_string()))?;
    let style = document().create_element("style")?;
    style.set_text_content(Some(KEYFRAMES_CSS));
    head.append_child(&style)?;
    Ok(())
}
