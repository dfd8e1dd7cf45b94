use crate::audio::AudioTap;
use crate::dom;
use crate::render;
use crate::stage::LoveStage;
use crate::viewport;
use instant::Instant;
use love_core::audio::Capabilities;
use love_core::scene::SceneState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Text controller tick: applies pending layout work at most once per frame.
pub struct StageFrame {
    pub stage: Rc<RefCell<LoveStage>>,
    pub layout_dirty: Rc<Cell<bool>>,
    pub window: web::Window,
    pub document: web::Document,
}

impl StageFrame {
    pub fn frame(&mut self) {
        if !self.layout_dirty.replace(false) {
            return;
        }
        let Ok(stage) = self.stage.try_borrow() else {
            self.layout_dirty.set(true);
            return;
        };
        let user = stage.config().user_scale();
        if let Some(scale) = viewport::compute_scale(&self.window, &self.document, user) {
            stage.apply_scale(scale);
        }
    }
}

/// 3D controller tick.
pub struct SceneFrame {
    pub scene: SceneState,
    pub gpu: render::GpuState,
    pub canvas: web::HtmlCanvasElement,
    pub tap: Option<AudioTap>,
    pub caps: Capabilities,
    pub last_instant: Instant,
}

impl SceneFrame {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let (w, h) = dom::sync_canvas_backing_size(&self.canvas);
        if (w, h) != self.gpu.size() {
            self.gpu.resize_if_needed(w, h);
            self.scene.resize(w, h);
        }

        let sample = self.tap.as_mut().map(|t| t.sample());
        let amplitude = self.caps.amplitude(sample);
        self.scene.update(dt_sec, amplitude);

        match self.gpu.render(&self.scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => self.gpu.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &SceneState,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("GPU init error: {:?}", e);
            None
        }
    }
}

/// Drive `on_frame` from `requestAnimationFrame` for the life of the page.
pub fn start_loop(mut on_frame: impl FnMut() + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        on_frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
