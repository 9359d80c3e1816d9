use crate::dom;
use crate::listener::ListenerGuard;
use folio_core::markup::{CONTACT_FORM_ID, CONTACT_SUBMIT_ID, CONTACT_SUCCESS_ID};
use folio_core::{Field, PageSnapshot, PageState, SubmitPhase};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ContactView {
    form: web::HtmlFormElement,
    submit: Option<web::HtmlElement>,
    success: Option<web::HtmlElement>,
    phase: SubmitPhase,
    revision: u64,
    _listeners: Vec<ListenerGuard>,
}

/// Name and value of the form control an `input` event came from.
fn control_value(ev: &web::Event) -> Option<(String, String)> {
    let target = ev.target()?;
    if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    let area = target.dyn_ref::<web::HtmlTextAreaElement>()?;
    Some((area.name(), area.value()))
}

impl ContactView {
    pub fn attach(document: &web::Document, state: &Rc<RefCell<PageState>>) -> Option<ContactView> {
        let form = document
            .get_element_by_id(CONTACT_FORM_ID)?
            .dyn_into::<web::HtmlFormElement>()
            .ok()?;

        let mut listeners = Vec::new();
        let on_input = state.clone();
        match ListenerGuard::new(&form, "input", move |ev| {
            if let Some((name, value)) = control_value(&ev) {
                if let Some(field) = Field::from_name(&name) {
                    on_input.borrow_mut().contact.set_field(field, &value);
                }
            }
        }) {
            Ok(g) => listeners.push(g),
            Err(e) => log::warn!("[contact] {:?}", e),
        }

        let on_submit = state.clone();
        match ListenerGuard::new(&form, "submit", move |ev| {
            ev.prevent_default();
            if !on_submit.borrow_mut().contact.submit() {
                log::info!("[contact] form incomplete or already sending");
            }
        }) {
            Ok(g) => listeners.push(g),
            Err(e) => log::warn!("[contact] {:?}", e),
        }

        Some(ContactView {
            form,
            submit: dom::html_element_by_id(document, CONTACT_SUBMIT_ID),
            success: dom::html_element_by_id(document, CONTACT_SUCCESS_ID),
            phase: SubmitPhase::Idle,
            revision: 0,
            _listeners: listeners,
        })
    }

    /// Reflect the form phase: button state, success notice, cleared inputs.
    pub fn update(&mut self, snap: &PageSnapshot) {
        if snap.contact_revision != self.revision {
            self.form.reset();
            self.revision = snap.contact_revision;
        }
        if snap.contact_phase == self.phase {
            return;
        }
        self.phase = snap.contact_phase;
        if let Some(btn) = &self.submit {
            let sending = self.phase == SubmitPhase::Submitting;
            if sending {
                _ = btn.set_attribute("disabled", "");
            } else {
                _ = btn.remove_attribute("disabled");
            }
            if let Ok(Some(label)) = btn.query_selector("span:last-child") {
                label.set_text_content(Some(if sending { "Sending..." } else { "Send Message" }));
            }
        }
        if let Some(notice) = &self.success {
            notice.set_hidden(self.phase != SubmitPhase::Submitted);
        }
    }
}
