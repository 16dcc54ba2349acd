//! Scroll tracking for the project detail page.

use wasm_bindgen::JsCast;

/// Offset applied when jumping to a section so it clears the fixed nav bar.
pub const SCROLL_OFFSET: f64 = -80.0;

/// Vertical extent of a page section in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Reading progress as a percentage, 0 when the document does not scroll.
pub fn scroll_progress(scroll_y: f64, doc_height: f64, viewport_height: f64) -> f64 {
    let scrollable = doc_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// The first section containing the line one third down the viewport.
pub fn active_section(
    sections: &[SectionBounds],
    scroll_y: f64,
    viewport_height: f64,
) -> Option<&str> {
    let line = scroll_y + viewport_height / 3.0;
    sections
        .iter()
        .find(|s| line >= s.top && line < s.top + s.height)
        .map(|s| s.id.as_str())
}

/// Snapshot of the window's scroll geometry: `(scroll_y, doc_height, viewport_height)`.
pub fn window_metrics() -> Option<(f64, f64, f64)> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let doc_height = window.document()?.document_element()?.scroll_height() as f64;
    Some((scroll_y, doc_height, viewport))
}

/// Current bounds of the elements with the given ids; missing ids are skipped.
pub fn section_bounds(ids: &[String]) -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    ids.iter()
        .filter_map(|id| {
            let el = document
                .get_element_by_id(id)?
                .dyn_into::<web_sys::HtmlElement>()
                .ok()?;
            Some(SectionBounds {
                id: id.clone(),
                top: el.offset_top() as f64,
                height: el.offset_height() as f64,
            })
        })
        .collect()
}

/// Smooth-scroll the window to the element with `id`.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };
    let page_y = window.scroll_y().unwrap_or(0.0);
    let top = element.get_bounding_client_rect().top() + page_y + SCROLL_OFFSET;

    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
