use crate::constants::{LAYOUT_EVENTS, PORTRAIT_QUERY, STAGE_ID};
use crate::dom;
use love_core::layout::{device_scale, is_portrait, stage_scale, DeviceProfile};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn portrait_now(window: &web::Window) -> bool {
    let mq = window
        .match_media(PORTRAIT_QUERY)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false);
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    is_portrait(mq, w, h)
}

/// Snapshot of the host device. Missing values read as zero.
pub fn read_device_profile(window: &web::Window) -> DeviceProfile {
    let ua = window.navigator().user_agent().unwrap_or_default();
    let (sw, sh) = window
        .screen()
        .map(|s| {
            (
                s.width().unwrap_or(0).max(0) as u32,
                s.height().unwrap_or(0).max(0) as u32,
            )
        })
        .unwrap_or((0, 0));
    DeviceProfile::from_user_agent(
        &ua,
        sw,
        sh,
        window.device_pixel_ratio(),
        portrait_now(window),
    )
}

/// Container scale for the current stage size, or `None` before the stage
/// element exists.
pub fn compute_scale(window: &web::Window, document: &web::Document, user_scale: f32) -> Option<f32> {
    let stage = document.get_element_by_id(STAGE_ID)?;
    let w = stage.client_width() as f32;
    let h = stage.client_height() as f32;
    let device = device_scale(&read_device_profile(window));
    Some(stage_scale(w, h, device, user_scale))
}

/// Mark `dirty` on window resize, orientation change and stage resize.
pub fn watch_layout(document: &web::Document, dirty: Rc<Cell<bool>>) {
    let on_window = dirty.clone();
    dom::add_window_listeners(&LAYOUT_EVENTS, move || on_window.set(true));

    let Some(stage) = document.get_element_by_id(STAGE_ID) else {
        log::warn!("[layout] #{} missing, stage resize not observed", STAGE_ID);
        return;
    };
    let on_stage = Closure::wrap(Box::new(move || dirty.set(true)) as Box<dyn FnMut()>);
    match web::ResizeObserver::new(on_stage.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(&stage);
            on_stage.forget();
        }
        Err(e) => log::warn!("[layout] ResizeObserver unavailable: {:?}", e),
    }
}
