use crate::constants::REDUCED_MOTION_QUERY;
use crate::listener::ListenerGuard;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `prefers-reduced-motion` subscription; unsubscribes on drop.
pub struct ReducedMotion {
    query: web::MediaQueryList,
    _change: Option<ListenerGuard>,
}

impl ReducedMotion {
    /// Sample the preference and call `on_change` whenever it flips.
    ///
    /// Returns `None` when the environment has no media query support, in
    /// which case motion is treated as allowed.
    pub fn watch(
        window: &web::Window,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Option<ReducedMotion> {
        let query = window.match_media(REDUCED_MOTION_QUERY).ok().flatten()?;
        let source = query.clone();
        let change = ListenerGuard::new(&query, "change", move |ev| {
            let reduced = ev
                .dyn_ref::<web::MediaQueryListEvent>()
                .map(|e| e.matches())
                .unwrap_or_else(|| source.matches());
            on_change(reduced);
        });
        let change = match change {
            Ok(g) => Some(g),
            Err(e) => {
                log::warn!("[motion] change listener: {:?}", e);
                None
            }
        };
        Some(ReducedMotion {
            query,
            _change: change,
        })
    }

    pub fn matches(&self) -> bool {
        self.query.matches()
    }
}
