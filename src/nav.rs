//! Section navigation: highlight follows the active section, clicks scroll.

use crate::dom;
use crate::listener::ListenerGuard;
use folio_core::markup::{NAV_ACTIVE_CLASS, NAV_ITEM_CLASS};
use folio_core::SectionId;
use std::cell::Cell;
use web_sys as web;

pub struct NavView {
    // (section index, button) for both desktop and mobile lists
    items: Vec<(usize, web::HtmlElement)>,
    shown: Cell<Option<usize>>,
    _clicks: Vec<ListenerGuard>,
}

impl NavView {
    pub fn attach(document: &web::Document) -> NavView {
        let mut items = Vec::new();
        let mut clicks = Vec::new();
        for button in dom::query_html_elements(document, &format!(".{NAV_ITEM_CLASS}")) {
            let Some(section) = button
                .get_attribute("data-target")
                .and_then(|t| SectionId::from_dom_id(&t))
            else {
                continue;
            };
            let doc = document.clone();
            match ListenerGuard::new(&button, "click", move |_| {
                log::debug!("[nav] scroll to {}", section.dom_id());
                dom::smooth_scroll_to(&doc, section.dom_id());
            }) {
                Ok(g) => clicks.push(g),
                Err(e) => log::warn!("[nav] {:?}", e),
            }
            items.push((section.order(), button));
        }
        NavView {
            items,
            shown: Cell::new(None),
            _clicks: clicks,
        }
    }

    /// Mark the item for `active` as current. Cheap when nothing changed.
    pub fn highlight(&self, active: usize) {
        if self.shown.get() == Some(active) {
            return;
        }
        for (index, button) in &self.items {
            let current = *index == active;
            _ = button
                .class_list()
                .toggle_with_force(NAV_ACTIVE_CLASS, current);
            if current {
                _ = button.set_attribute("aria-current", "page");
            } else {
                _ = button.remove_attribute("aria-current");
            }
        }
        self.shown.set(Some(active));
    }
}
