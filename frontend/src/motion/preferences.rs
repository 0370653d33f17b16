use web_sys::HtmlElement;
use wasm_bindgen::JsCast;

use crate::browser;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn prefers_reduced_motion() -> bool {
    browser::media_matches(REDUCED_MOTION_QUERY).unwrap_or(false)
}

/// Collapses CSS animations to a single near-instant run when the user has
/// asked for less motion. Returns whether it did.
pub fn apply_reduced_motion() -> bool {
    if !prefers_reduced_motion() {
        return false;
    }
    let Some(root) = browser::root_element().and_then(|e| e.dyn_into::<HtmlElement>().ok()) else {
        return false;
    };
    let style = root.style();
    for (name, value) in [("--animation-duration", "0.01ms"), ("--animation-iteration-count", "1")] {
        if let Err(e) = style.set_property(name, value) {
            log::warn!("Could not set {}: {:?}", name, e);
        }
    }
    log::info!("Reduced motion requested, animations shortened");
    true
}
