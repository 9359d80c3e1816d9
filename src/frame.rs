use crate::contact::ContactView;
use crate::overlay;
use folio_core::markup::{HERO_CARET_ID, HERO_TEXT_ID};
use folio_core::PageState;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<PageState>>,
    pub document: web::Document,
    pub hero_text: Option<web::Element>,
    pub hero_caret: Option<web::HtmlElement>,
    pub contact: Option<ContactView>,
    pub last_instant: Instant,
    pub shown_hero: String,
}

impl FrameContext {
    pub fn new(
        state: Rc<RefCell<PageState>>,
        document: web::Document,
        contact: Option<ContactView>,
    ) -> Self {
        let hero_text = document.get_element_by_id(HERO_TEXT_ID);
        let hero_caret = crate::dom::html_element_by_id(&document, HERO_CARET_ID);
        Self {
            state,
            document,
            hero_text,
            hero_caret,
            contact,
            last_instant: Instant::now(),
            shown_hero: String::new(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let (changes, snap) = {
            let mut state = self.state.borrow_mut();
            let changes = state.tick(dt);
            (changes, state.snapshot())
        };
        if !changes.any() && self.shown_hero == snap.hero_visible {
            return;
        }

        if changes.splash {
            log::info!("[page] ready");
            overlay::sync(&self.document, snap.loading);
        }

        if self.shown_hero != snap.hero_visible {
            if let Some(el) = &self.hero_text {
                el.set_text_content(Some(&snap.hero_visible));
            }
            self.shown_hero.clone_from(&snap.hero_visible);
        }
        if let Some(caret) = &self.hero_caret {
            caret.set_hidden(!snap.hero_caret);
        }

        if let Some(contact) = &mut self.contact {
            contact.update(&snap);
        }
    }
}

/// requestAnimationFrame loop; stops and releases its callback on drop.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick_weak = Rc::downgrade(&tick);
        let handle_tick = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            frame_ctx.borrow_mut().frame();
            let Some(tick) = tick_weak.upgrade() else {
                return;
            };
            let tick = tick.borrow();
            if let (Some(w), Some(cb)) = (web::window(), tick.as_ref()) {
                handle_tick.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            }
        }) as Box<dyn FnMut()>));
        if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
            handle.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }
        FrameLoop { tick, handle }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}
