//! Binds the background music state machine to `#bg-audio` and its controls.

use crate::audio;
use crate::constants::*;
use crate::dom;
use crate::overlay;
use love_core::constants::{DEFAULT_VOLUME, FIRST_TRACK_KEY};
use love_core::player::{icon_class, Command, Player};
use love_core::playlist::Playlist;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct MusicHost {
    player: Player,
    audio: web::HtmlAudioElement,
    document: web::Document,
    icon: Option<web::Element>,
    ctx: Option<web::AudioContext>,
}

pub type SharedMusic = Rc<RefCell<MusicHost>>;

impl MusicHost {
    fn sync_icon(&self) {
        if let Some(icon) = &self.icon {
            icon.set_class_name(icon_class(self.audio.paused()));
        }
    }

    fn sync_ui(&self) {
        overlay::set_visible(&self.document, self.player.prompt_visible());
        self.sync_icon();
    }

    fn load_track(&mut self, key: &str) {
        let track = self.player.load_track(key);
        let playlist = self.player.playlist();
        log::info!(
            "[music] track {}/{} '{}' ({})",
            playlist.index() + 1,
            playlist.len(),
            track.title,
            track.src
        );
        self.audio.set_src(track.src);
    }
}

/// Set up the player: first track, volume, autoplay attempt and every listener.
pub fn setup(document: &web::Document) -> anyhow::Result<SharedMusic> {
    let audio = dom::element_by_id::<web::HtmlAudioElement>(document, AUDIO_ID)?;
    let icon = document
        .get_element_by_id(MUSIC_TOGGLE_ID)
        .and_then(|b| b.query_selector("i").ok().flatten());
    if icon.is_none() {
        log::warn!("[music] #{} has no icon", MUSIC_TOGGLE_ID);
    }

    let host = Rc::new(RefCell::new(MusicHost {
        player: Player::new(Playlist::default()),
        audio,
        document: document.clone(),
        icon,
        ctx: None,
    }));
    {
        let mut h = host.borrow_mut();
        h.load_track(FIRST_TRACK_KEY);
        h.audio.set_volume(DEFAULT_VOLUME);
        h.audio.set_loop(false);
        h.sync_icon();
    }

    wire_media_events(&host);
    wire_gestures(&host);
    wire_buttons(document, &host);

    let cmd = host.borrow_mut().player.start();
    execute(&host, cmd);
    Ok(host)
}

/// Route the media element through an analyser. Best effort.
pub fn attach_tap(host: &SharedMusic) -> Option<audio::AudioTap> {
    let mut h = host.borrow_mut();
    match audio::AudioTap::attach(&h.audio) {
        Ok(tap) => {
            h.ctx = Some(tap.context().clone());
            if !h.audio.paused() {
                audio::resume(tap.context());
            }
            Some(tap)
        }
        Err(e) => {
            log::warn!("[music] audio analysis unavailable: {:?}", e);
            None
        }
    }
}

pub fn execute(host: &SharedMusic, cmd: Command) {
    match cmd {
        Command::Pause => {
            _ = host.borrow().audio.pause();
            // resync once the pause has been applied
            let host = host.clone();
            spawn_local(async move {
                _ = JsFuture::from(js_sys::Promise::resolve(&JsValue::UNDEFINED)).await;
                host.borrow().sync_icon();
            });
        }
        Command::Play(reason) => {
            let promise = host.borrow().audio.play();
            let host = host.clone();
            spawn_local(async move {
                let ok = match promise {
                    Ok(p) => JsFuture::from(p).await.is_ok(),
                    Err(_) => false,
                };
                if !ok {
                    log::info!("[music] play rejected ({:?})", reason);
                }
                let mut h = host.borrow_mut();
                let paused = h.audio.paused();
                h.player.on_play_settled(reason, ok, paused);
                h.sync_ui();
            });
        }
    }
}

pub fn next_track(host: &SharedMusic) {
    let cmd = {
        let mut h = host.borrow_mut();
        let (track, cmd) = h.player.next_track();
        log::info!("[music] next: '{}'", track.title);
        h.audio.set_src(track.src);
        cmd
    };
    execute(host, cmd);
}

pub fn toggle(host: &SharedMusic) {
    let cmd = {
        let mut h = host.borrow_mut();
        let paused = h.audio.paused();
        h.player.toggle(paused)
    };
    execute(host, cmd);
}

fn wire_media_events(host: &SharedMusic) {
    let target = host.borrow().audio.clone();
    for ev in ["play", "pause"] {
        let host = host.clone();
        let closure = Closure::wrap(Box::new(move || {
            let Ok(mut h) = host.try_borrow_mut() else {
                return;
            };
            let paused = h.audio.paused();
            h.player.on_media_event(paused);
            if !paused {
                if let Some(ctx) = &h.ctx {
                    audio::resume(ctx);
                }
            }
            h.sync_ui();
        }) as Box<dyn FnMut()>);
        _ = target.add_event_listener_with_callback(ev, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_gestures(host: &SharedMusic) {
    let host = host.clone();
    dom::add_window_listeners(&GESTURE_EVENTS, move || {
        let cmd = match host.try_borrow_mut() {
            Ok(mut h) => h.player.on_gesture(),
            Err(_) => None,
        };
        if let Some(cmd) = cmd {
            execute(&host, cmd);
        }
    });
}

fn wire_buttons(document: &web::Document, host: &SharedMusic) {
    let next = host.clone();
    dom::add_click_listener(document, NEXT_TRACK_ID, move || next_track(&next));
    let toggle_host = host.clone();
    dom::add_click_listener(document, MUSIC_TOGGLE_ID, move || toggle(&toggle_host));
}
