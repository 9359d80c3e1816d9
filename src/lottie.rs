//! Bindings to the page's global `lottie` player (lottie-web).

use crate::constants::LOTTIE_RENDERER;
use folio_core::{AnimationConfig, AnimationHandle};
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    /// Player instance returned by `lottie.loadAnimation`.
    pub type AnimationItem;

    #[wasm_bindgen(catch, js_namespace = lottie, js_name = loadAnimation)]
    fn load_animation(params: &Object) -> Result<AnimationItem, JsValue>;

    #[wasm_bindgen(method, js_name = getDuration)]
    fn get_duration(this: &AnimationItem, in_frames: bool) -> f64;

    #[wasm_bindgen(method, js_name = goToAndStop)]
    fn go_to_and_stop(this: &AnimationItem, value: f64, is_frame: bool);

    #[wasm_bindgen(method, js_name = play)]
    fn play_item(this: &AnimationItem);

    #[wasm_bindgen(method, js_name = pause)]
    fn pause_item(this: &AnimationItem);

    #[wasm_bindgen(method, js_name = setSpeed)]
    fn set_speed(this: &AnimationItem, speed: f64);

    #[wasm_bindgen(method)]
    fn destroy(this: &AnimationItem);
}

/// Owned player; destroyed on drop.
pub struct Player {
    item: AnimationItem,
}

impl Player {
    /// Mount a player for `data` (the parsed animation document) into `container`.
    pub fn mount(
        container: &web::Element,
        data: &JsValue,
        cfg: &AnimationConfig,
    ) -> Result<Player, JsValue> {
        let params = Object::new();
        Reflect::set(&params, &"container".into(), container)?;
        Reflect::set(&params, &"renderer".into(), &LOTTIE_RENDERER.into())?;
        Reflect::set(&params, &"loop".into(), &cfg.loops().into())?;
        Reflect::set(&params, &"autoplay".into(), &cfg.autoplay().into())?;
        Reflect::set(&params, &"animationData".into(), data)?;
        let item = load_animation(&params)?;
        item.set_speed(cfg.speed);
        Ok(Player { item })
    }
}

impl AnimationHandle for Player {
    fn total_frames(&self) -> Option<f64> {
        let frames = self.item.get_duration(true);
        frames.is_finite().then_some(frames)
    }

    fn go_to_and_stop(&self, value: f64, is_frame: bool) {
        self.item.go_to_and_stop(value, is_frame);
    }

    fn play(&self) {
        self.item.play_item();
    }

    fn pause(&self) {
        self.item.pause_item();
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.item.destroy();
    }
}
