#![cfg(target_arch = "wasm32")]
use instant::Instant;
use love_core::audio::Capabilities;
use love_core::constants::DEFAULT_ELEMENT_COUNT;
use love_core::scene::SceneState;
use love_core::ShowConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod frame;
mod keys;
mod music;
mod overlay;
mod render;
mod stage;
mod starfield;
mod style;
mod viewport;

use keys::StageAction;
use stage::LoveStage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("love-web starting");

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

    let profile = viewport::read_device_profile(&window);
    let config = ShowConfig::new(DEFAULT_ELEMENT_COUNT, profile.is_mobile)?;
    log::info!(
        "[init] mobile={} iphone={} screen={}x{} dpr={}",
        profile.is_mobile,
        profile.is_iphone,
        profile.screen_width,
        profile.screen_height,
        profile.device_pixel_ratio
    );

    let mut rng = StdRng::from_entropy();
    let stars = starfield::populate(&document, config.is_mobile, &mut rng)?;
    log::info!("[init] {} stars", stars);

    let stage = Rc::new(RefCell::new(LoveStage::new(
        &document,
        config.clone(),
        StdRng::seed_from_u64(rng.gen()),
    )?));
    start_text_controller(&window, &document, &stage);

    let music_host = match music::setup(&document) {
        Ok(m) => Some(m),
        Err(e) => {
            log::error!("music setup error: {:?}", e);
            None
        }
    };
    let tap = music_host.as_ref().and_then(music::attach_tap);
    let caps = Capabilities {
        audio_analysis_available: tap.is_some(),
    };

    start_scene_controller(&document, &config, tap, caps, rng.gen()).await;
    Ok(())
}

fn start_text_controller(
    window: &web::Window,
    document: &web::Document,
    stage: &Rc<RefCell<LoveStage>>,
) {
    let layout_dirty = Rc::new(Cell::new(true));
    viewport::watch_layout(document, layout_dirty.clone());
    wire_keys(stage, &layout_dirty);

    let mut ctx = frame::StageFrame {
        stage: stage.clone(),
        layout_dirty,
        window: window.clone(),
        document: document.clone(),
    };
    frame::start_loop(move || ctx.frame());
}

/// Runs the 3D backdrop if a canvas and a graphics adapter are available;
/// otherwise logs and leaves the text controller running alone.
async fn start_scene_controller(
    document: &web::Document,
    config: &ShowConfig,
    tap: Option<audio::AudioTap>,
    caps: Capabilities,
    seed: u64,
) {
    let canvas = match dom::element_by_id::<web::HtmlCanvasElement>(document, constants::CANVAS_ID)
    {
        Ok(c) => c,
        Err(e) => {
            log::error!("3D scene disabled: {:?}", e);
            return;
        }
    };
    let (w, h) = dom::sync_canvas_backing_size(&canvas);
    let scene = SceneState::new(config, w as f32 / h.max(1) as f32, seed);
    let Some(gpu) = frame::init_gpu(&canvas, &scene).await else {
        return;
    };
    let mut ctx = frame::SceneFrame {
        scene,
        gpu,
        canvas,
        tap,
        caps,
        last_instant: Instant::now(),
    };
    frame::start_loop(move || ctx.frame());
}

fn wire_keys(stage: &Rc<RefCell<LoveStage>>, layout_dirty: &Rc<Cell<bool>>) {
    let Some(window) = web::window() else {
        return;
    };
    let stage = stage.clone();
    let layout_dirty = layout_dirty.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let Some(action) = keys::action_for_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        let Ok(mut stage) = stage.try_borrow_mut() else {
            return;
        };
        match action {
            StageAction::TogglePause => stage.toggle_play_state(),
            StageAction::Faster | StageAction::Slower => {
                let speed = keys::stepped_speed(
                    stage.config().speed(),
                    action == StageAction::Faster,
                );
                if let Err(e) = stage.set_speed(speed) {
                    log::warn!("[keys] {}", e);
                }
            }
            StageAction::Reset => {
                if let Err(e) = stage.regenerate() {
                    log::error!("[keys] reset failed: {:?}", e);
                }
                layout_dirty.set(true);
            }
        }
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
