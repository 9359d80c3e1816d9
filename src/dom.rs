use folio_core::{ContainerGeometry, ScrollState, SectionExtent};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Current scroll offset and viewport height; `None` if the window cannot report them.
pub fn scroll_state(window: &web::Window) -> Option<ScrollState> {
    let offset_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some(ScrollState::new(offset_y, viewport_height))
}

/// Document-space extent of a section element. Detached elements report nothing.
pub fn section_extent(el: &web::HtmlElement) -> Option<SectionExtent> {
    if !el.is_connected() {
        return None;
    }
    let extent = SectionExtent::new(el.offset_top() as f64, el.offset_height() as f64);
    extent.is_measurable().then_some(extent)
}

/// Viewport-relative geometry of an animation container.
pub fn container_geometry(el: &web::Element) -> Option<ContainerGeometry> {
    if !el.is_connected() {
        return None;
    }
    let rect = el.get_bounding_client_rect();
    Some(ContainerGeometry::new(rect.top(), rect.height()))
}

/// All elements matching `selector`, in document order, as `HtmlElement`s.
pub fn query_html_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list
                .get(i)
                .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
            {
                out.push(el);
            }
        }
    }
    out
}

pub fn smooth_scroll_to(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}
