#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod animation;
mod constants;
mod contact;
mod dom;
mod frame;
mod listener;
mod lottie;
mod motion;
mod nav;
mod overlay;
mod page;
mod scroll;

thread_local! {
    // the mounted page; dropping it releases every listener and frame callback
    static PAGE: RefCell<Option<page::Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let page = page::Page::mount(&window, &document)?;
    PAGE.with(|slot| {
        // remount replaces the previous page after it has unsubscribed
        if slot.borrow_mut().replace(page).is_some() {
            log::warn!("[page] replaced an already mounted page");
        }
    });
    Ok(())
}

/// Unmount the page: stops the frame loop and removes every listener.
#[wasm_bindgen]
pub fn teardown() {
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    if let Some(page) = page {
        log::info!("[page] teardown at section {}", page.active_section());
    }
}
