//! Background music state machine.
//!
//! The player never touches the media element itself. Each operation returns
//! a [`Command`] for the host to perform, and the host reports back through
//! [`Player::on_play_settled`] and [`Player::on_media_event`] once the
//! element has actually changed. The toggle icon is always derived from the
//! element's real `paused` flag, never from the state kept here.

use crate::playlist::{Playlist, Track};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Unstarted,
    BlockedAwaitingGesture,
    Playing,
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayReason {
    Autoplay,
    Gesture,
    NextTrack,
    Toggle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(PlayReason),
    Pause,
}

pub const ICON_PLAY: &str = "fas fa-play";
pub const ICON_PAUSE: &str = "fas fa-pause";

/// Icon class mirroring the media element: a play glyph while paused.
#[inline]
pub fn icon_class(media_paused: bool) -> &'static str {
    if media_paused {
        ICON_PLAY
    } else {
        ICON_PAUSE
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    playlist: Playlist,
    state: PlayerState,
    prompt_visible: bool,
    gesture_in_flight: bool,
}

impl Player {
    pub fn new(playlist: Playlist) -> Self {
        Self {
            playlist,
            state: PlayerState::Unstarted,
            prompt_visible: false,
            gesture_in_flight: false,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn prompt_visible(&self) -> bool {
        self.prompt_visible
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// First playback attempt after the page loads.
    pub fn start(&mut self) -> Command {
        Command::Play(PlayReason::Autoplay)
    }

    /// A click or touch anywhere on the page. Only retries while blocked, and
    /// only once until that retry settles.
    pub fn on_gesture(&mut self) -> Option<Command> {
        if self.state != PlayerState::BlockedAwaitingGesture || self.gesture_in_flight {
            return None;
        }
        self.gesture_in_flight = true;
        Some(Command::Play(PlayReason::Gesture))
    }

    /// Select a track by key for the host to load. Unknown keys load the
    /// first track.
    pub fn load_track(&mut self, key: &str) -> &'static Track {
        self.playlist.select(key)
    }

    /// Move to the next track. The host loads the returned source, then plays.
    pub fn next_track(&mut self) -> (&'static Track, Command) {
        let key = self.playlist.next_key();
        let track = self.load_track(key);
        (track, Command::Play(PlayReason::NextTrack))
    }

    pub fn toggle(&mut self, media_paused: bool) -> Command {
        if media_paused {
            Command::Play(PlayReason::Toggle)
        } else {
            Command::Pause
        }
    }

    /// Outcome of a play request. Rejections are expected (autoplay policy)
    /// and only ever move the player into a blocked or paused state.
    pub fn on_play_settled(&mut self, reason: PlayReason, ok: bool, media_paused: bool) {
        match reason {
            PlayReason::Autoplay => {
                if ok {
                    self.state = PlayerState::Playing;
                } else {
                    self.state = PlayerState::BlockedAwaitingGesture;
                    self.prompt_visible = true;
                }
            }
            PlayReason::Gesture => {
                self.gesture_in_flight = false;
                self.prompt_visible = false;
                self.state = if ok {
                    PlayerState::Playing
                } else {
                    PlayerState::BlockedAwaitingGesture
                };
            }
            PlayReason::NextTrack | PlayReason::Toggle => {
                if ok {
                    self.state = PlayerState::Playing;
                    self.prompt_visible = false;
                } else if self.state != PlayerState::BlockedAwaitingGesture {
                    self.state = if media_paused {
                        PlayerState::Paused
                    } else {
                        PlayerState::Playing
                    };
                }
            }
        }
    }

    /// `play` / `pause` events from the media element.
    pub fn on_media_event(&mut self, media_paused: bool) {
        if !media_paused {
            self.state = PlayerState::Playing;
            self.prompt_visible = false;
        } else if self.state == PlayerState::Playing {
            self.state = PlayerState::Paused;
        }
    }
}
