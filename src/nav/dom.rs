use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::nav::sync::{ScrollProbe, Section};

/// Height of the fixed header, measured fresh on every call.
pub fn header_height(document: &Document) -> f64 {
    document
        .query_selector(".header")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

pub fn scroll_probe(window: &Window, document: &Document) -> ScrollProbe {
    ScrollProbe {
        offset: window.scroll_y().unwrap_or(0.0),
        header_height: header_height(document),
    }
}

/// Measures one section's current extent. `None` when the element is
/// missing from the page.
pub fn measure_section(document: &Document, id: &str) -> Option<Section> {
    let element = document.get_element_by_id(id)?;
    let element = element.dyn_into::<HtmlElement>().ok()?;
    Some(Section::new(
        id,
        element.offset_top() as f64,
        element.offset_height() as f64,
    ))
}

/// Measures all known sections in document order, skipping (and logging)
/// any whose element has gone missing.
pub fn measure_sections(document: &Document, ids: &[String]) -> Vec<Section> {
    ids.iter()
        .filter_map(|id| {
            let section = measure_section(document, id);
            if section.is_none() {
                warn!("section element missing: {id}");
            }
            section
        })
        .collect()
}

/// Smooth-scrolls so the section top lands just below the fixed header.
/// Returns false (after logging) when the section does not exist.
pub fn scroll_to_section(window: &Window, document: &Document, id: &str) -> bool {
    let Some(section) = measure_section(document, id) else {
        warn!("cannot scroll, section not found: {id}");
        return false;
    };
    let target = (section.top - header_height(document)).max(0.0);
    let options = ScrollToOptions::new();
    options.set_top(target);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// The current location hash, including the leading `#` (empty when none).
pub fn current_hash(window: &Window) -> String {
    window.location().hash().unwrap_or_default()
}

/// Rewrites the hash without pushing a history entry, so scroll-driven
/// updates never pollute back/forward.
pub fn replace_hash(window: &Window, hash: &str) {
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(hash));
    }
}
