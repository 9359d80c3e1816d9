//! Window scroll/resize notifications, coalesced to one delivery per frame.

use crate::constants::{RESIZE_EVENT, SCROLL_EVENT};
use crate::dom;
use crate::listener::ListenerGuard;
use anyhow::anyhow;
use folio_core::{FrameGate, ScrollState};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type ScrollSubscriber = Box<dyn FnMut(ScrollState)>;

struct Inner {
    window: web::Window,
    gate: RefCell<FrameGate>,
    pending: Cell<Option<i32>>,
    subscribers: RefCell<Vec<ScrollSubscriber>>,
    on_frame: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Inner {
    fn notify(&self) {
        if !self.gate.borrow_mut().request() {
            return;
        }
        let id = self.on_frame.borrow().as_ref().and_then(|f| {
            self.window
                .request_animation_frame(f.as_ref().unchecked_ref())
                .ok()
        });
        match id {
            Some(id) => self.pending.set(Some(id)),
            // nothing scheduled; let the next notification try again
            None => self.gate.borrow_mut().cancel(),
        }
    }

    fn deliver(&self) {
        self.pending.set(None);
        let folded = self.gate.borrow_mut().begin_frame();
        let Some(state) = dom::scroll_state(&self.window) else {
            return;
        };
        if folded > 0 {
            log::trace!("[scroll] folded {} notifications", folded);
        }
        for sub in self.subscribers.borrow_mut().iter_mut() {
            sub(state);
        }
    }
}

/// Owner of the window scroll/resize subscription.
///
/// Dropping it removes both listeners and cancels a frame that is still pending.
pub struct ScrollStream {
    inner: Rc<Inner>,
    _listeners: [ListenerGuard; 2],
}

impl ScrollStream {
    pub fn new(window: &web::Window) -> anyhow::Result<Self> {
        let inner = Rc::new(Inner {
            window: window.clone(),
            gate: RefCell::new(FrameGate::new()),
            pending: Cell::new(None),
            subscribers: RefCell::new(Vec::new()),
            on_frame: RefCell::new(None),
        });

        let weak: Weak<Inner> = Rc::downgrade(&inner);
        *inner.on_frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.deliver();
            }
        }) as Box<dyn FnMut()>));

        let on_scroll = inner.clone();
        let scroll = ListenerGuard::passive(window, SCROLL_EVENT, move |_| on_scroll.notify())
            .map_err(|e| anyhow!("scroll subscription: {e}"))?;
        let on_resize = inner.clone();
        let resize = ListenerGuard::passive(window, RESIZE_EVENT, move |_| on_resize.notify())
            .map_err(|e| anyhow!("resize subscription: {e}"))?;

        Ok(Self {
            inner,
            _listeners: [scroll, resize],
        })
    }

    /// Register a consumer; it is called once per coalesced frame.
    pub fn subscribe(&self, subscriber: impl FnMut(ScrollState) + 'static) {
        self.inner.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    /// Deliver the current scroll state to every subscriber immediately.
    pub fn flush(&self) {
        if let Some(id) = self.inner.pending.take() {
            _ = self.inner.window.cancel_animation_frame(id);
        }
        self.inner.deliver();
    }
}

impl Drop for ScrollStream {
    fn drop(&mut self) {
        if let Some(id) = self.inner.pending.take() {
            _ = self.inner.window.cancel_animation_frame(id);
        }
        self.inner.gate.borrow_mut().cancel();
        self.inner.subscribers.borrow_mut().clear();
    }
}
