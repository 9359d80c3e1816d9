//! Decorative animation slots: asset fetch, player lifecycle and fallbacks.

use crate::dom;
use crate::listener::ListenerGuard;
use crate::lottie::Player;
use folio_core::asset::{self, AssetError};
use folio_core::markup;
use folio_core::{AnimationConfig, PlaybackMode, Presentation, ScrollAnimationDriver};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct DecorativeAnimation {
    index: usize,
    container: web::Element,
    driver: ScrollAnimationDriver,
    data: Option<JsValue>,
    player: Option<Player>,
    fetch: Option<web::AbortController>,
    hover: Vec<ListenerGuard>,
    shown: Option<Presentation>,
}

pub type SharedAnimation = Rc<RefCell<DecorativeAnimation>>;

impl DecorativeAnimation {
    /// Bind to the slot rendered for `index` and start loading its asset.
    pub fn attach(
        document: &web::Document,
        index: usize,
        cfg: AnimationConfig,
        reduced_motion: bool,
    ) -> Option<SharedAnimation> {
        let container = document.get_element_by_id(&markup::animation_slot_id(index))?;
        let mut driver = ScrollAnimationDriver::new(cfg);
        driver.set_reduced_motion(reduced_motion);
        let anim = Rc::new(RefCell::new(DecorativeAnimation {
            index,
            container,
            driver,
            data: None,
            player: None,
            fetch: None,
            hover: Vec::new(),
            shown: None,
        }));
        anim.borrow_mut().render();
        if cfg.mode == PlaybackMode::Hover {
            wire_hover(&anim);
        }
        start_fetch(&anim);
        Some(anim)
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if self.driver.set_reduced_motion(reduced) {
            self.render();
        }
    }

    /// Scroll-driven seek for this frame; a no-op outside scroll mode.
    pub fn on_scroll(&mut self, viewport_height: f64) {
        if !self.driver.is_scroll_driven() {
            return;
        }
        let Some(player) = self.player.as_ref() else {
            return;
        };
        let geometry = dom::container_geometry(&self.container);
        self.driver.recompute(geometry, viewport_height, player);
    }

    fn loaded(&mut self, total_frames: f64, data: JsValue) {
        self.fetch = None;
        self.data = Some(data);
        self.driver.set_loaded(total_frames);
        self.render();
    }

    fn failed(&mut self, err: &AssetError) {
        self.fetch = None;
        log::warn!(
            "[lottie] animation {} ({}) not available: {}",
            self.index,
            self.driver.config().url,
            err
        );
        self.driver.set_failed();
        self.render();
    }

    /// Bring the container's content in line with the driver's presentation.
    fn render(&mut self) {
        let want = self.driver.presentation();
        if self.shown == Some(want) {
            return;
        }
        // tear the player down before its container is rewritten
        self.player = None;
        match want {
            Presentation::Spinner => self.container.set_inner_html(&markup::spinner_html()),
            Presentation::Fallback => self
                .container
                .set_inner_html(&markup::fallback_html(self.driver.config())),
            Presentation::Animation => {
                self.container.set_inner_html("");
                let Some(data) = self.data.as_ref() else {
                    return;
                };
                match Player::mount(&self.container, data, self.driver.config()) {
                    Ok(p) => {
                        log::info!("[lottie] animation {} loaded", self.index);
                        self.player = Some(p);
                    }
                    Err(e) => {
                        log::error!("[lottie] player error for animation {}: {:?}", self.index, e);
                        self.driver.set_failed();
                        self.container
                            .set_inner_html(&markup::fallback_html(self.driver.config()));
                        self.shown = Some(Presentation::Fallback);
                        return;
                    }
                }
            }
        }
        self.shown = Some(want);
        if want == Presentation::Animation {
            self.sync_to_viewport();
        }
    }

    /// A freshly mounted player starts at frame 0; seek it to the current scroll position.
    fn sync_to_viewport(&mut self) {
        let viewport_height = web::window()
            .and_then(|w| dom::scroll_state(&w))
            .map(|s| s.viewport_height);
        if let Some(vh) = viewport_height {
            self.on_scroll(vh);
        }
    }
}

impl Drop for DecorativeAnimation {
    fn drop(&mut self) {
        if let Some(ctrl) = self.fetch.take() {
            ctrl.abort();
        }
        self.hover.clear();
        self.player = None;
    }
}

fn wire_hover(anim: &SharedAnimation) {
    let container = anim.borrow().container.clone();
    let enter = Rc::downgrade(anim);
    let leave = Rc::downgrade(anim);
    let guards = [
        ListenerGuard::new(&container, "mouseenter", move |_| {
            with_player(&enter, |a, p| a.driver.pointer_enter(p));
        }),
        ListenerGuard::new(&container, "mouseleave", move |_| {
            with_player(&leave, |a, p| a.driver.pointer_leave(p));
        }),
    ];
    let mut a = anim.borrow_mut();
    for g in guards {
        match g {
            Ok(g) => a.hover.push(g),
            Err(e) => log::warn!("[lottie] hover wiring: {:?}", e),
        }
    }
}

fn with_player(anim: &Weak<RefCell<DecorativeAnimation>>, f: impl FnOnce(&DecorativeAnimation, &Player)) {
    if let Some(anim) = anim.upgrade() {
        let a = anim.borrow();
        if let Some(p) = a.player.as_ref() {
            f(&a, p);
        }
    }
}

fn start_fetch(anim: &SharedAnimation) {
    let controller = web::AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());
    let url = anim.borrow().driver.config().url;
    anim.borrow_mut().fetch = controller;
    let weak = Rc::downgrade(anim);
    spawn_local(async move {
        let result = fetch_animation(url, signal.as_ref()).await;
        // the slot may have been torn down while the request was in flight
        let Some(anim) = weak.upgrade() else {
            return;
        };
        let mut a = anim.borrow_mut();
        match result {
            Ok((frames, data)) => a.loaded(frames, data),
            Err(AssetError::Aborted) => {}
            Err(e) => a.failed(&e),
        }
    });
}

async fn fetch_animation(
    url: &str,
    signal: Option<&web::AbortSignal>,
) -> Result<(f64, JsValue), AssetError> {
    let window = web::window().ok_or_else(|| AssetError::Network("no window".into()))?;
    let init = web::RequestInit::new();
    init.set_signal(signal);
    let resp_value = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(|e| fetch_error(e, signal))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|_| AssetError::Network("not a Response".into()))?;
    let content_type = resp.headers().get("content-type").ok().flatten();
    let text_promise = resp.text().map_err(|e| fetch_error(e, signal))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| fetch_error(e, signal))?
        .as_string()
        .unwrap_or_default();
    let header = asset::validate_response(resp.status(), content_type.as_deref(), &text)?;
    let data = js_sys::JSON::parse(&text)
        .map_err(|e| AssetError::Network(format!("JSON.parse: {:?}", e)))?;
    log::debug!(
        "[lottie] {} header: {} frames, {:.2}s",
        url,
        header.total_frames(),
        header.duration_secs().unwrap_or(0.0)
    );
    Ok((header.total_frames(), data))
}

fn fetch_error(e: JsValue, signal: Option<&web::AbortSignal>) -> AssetError {
    if signal.map(|s| s.aborted()).unwrap_or(false) {
        AssetError::Aborted
    } else {
        AssetError::Network(format!("{:?}", e))
    }
}
