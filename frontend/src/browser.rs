use web_sys::{window, Document, Element, ScrollBehavior, ScrollIntoViewOptions};

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// The `<html>` element.
pub fn root_element() -> Option<Element> {
    document().and_then(|d| d.document_element())
}

pub fn media_matches(query: &str) -> Option<bool> {
    window()
        .and_then(|w| w.match_media(query).ok())
        .flatten()
        .map(|list| list.matches())
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> Option<f64> {
    window().and_then(|w| w.inner_height().ok()).and_then(|h| h.as_f64())
}

pub fn scroll_to_section(section_id: &str) {
    if let Some(element) = document().and_then(|d| d.get_element_by_id(section_id)) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        log::warn!("No section with id {} to scroll to", section_id);
    }
}

/// Document-relative top edge and height of the element with `id`.
pub fn section_bounds(id: &str) -> Option<(f64, f64)> {
    let element = document()?.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some((rect.top() + scroll_y(), rect.height()))
}
