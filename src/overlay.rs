use crate::constants::HIDDEN_CLASS;
use folio_core::markup::SPLASH_ID;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(SPLASH_ID) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        _ = el.remove_attribute("aria-hidden");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(SPLASH_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        _ = el.set_attribute("aria-hidden", "true");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(SPLASH_ID)
        .map(|el| el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(true)
}

/// Match the splash overlay to the page's loading flag.
pub fn sync(document: &web::Document, loading: bool) {
    match (loading, is_hidden(document)) {
        (true, true) => show(document),
        (false, false) => hide(document),
        _ => {}
    }
}
