use love_core::constants::FIRST_TRACK_KEY;
use love_core::player::*;
use love_core::playlist::*;

/// Stand-in for the media element: tracks `paused` and whether play succeeds.
struct FakeMedia {
    paused: bool,
    allow_play: bool,
}

impl FakeMedia {
    fn run(&mut self, player: &mut Player, cmd: Command) {
        match cmd {
            Command::Pause => {
                self.paused = true;
                player.on_media_event(true);
            }
            Command::Play(reason) => {
                if self.allow_play {
                    self.paused = false;
                    player.on_media_event(false);
                }
                player.on_play_settled(reason, self.allow_play, self.paused);
            }
        }
    }
}

#[test]
fn next_cycles_back_to_start() {
    let mut pl = Playlist::default();
    let start = pl.index();
    for _ in 0..pl.len() {
        let key = pl.next_key();
        pl.select(key);
        assert!(pl.index() < pl.len());
    }
    assert_eq!(pl.index(), start);
}

#[test]
fn unknown_key_falls_back_to_first_track() {
    let mut pl = Playlist::default();
    assert_eq!(pl.select("lancuoi").key, "lancuoi");
    assert_eq!(pl.index(), 2);
    assert_eq!(pl.select("missing").key, "xinloi");
    assert_eq!(pl.index(), 0);
}

#[test]
fn blocked_autoplay_shows_prompt_until_gesture() {
    let mut player = Player::new(Playlist::default());
    let mut media = FakeMedia {
        paused: true,
        allow_play: false,
    };
    let cmd = player.start();
    media.run(&mut player, cmd);
    assert_eq!(player.state(), PlayerState::BlockedAwaitingGesture);
    assert!(player.prompt_visible());

    media.allow_play = true;
    let cmd = player.on_gesture().expect("gesture retries while blocked");
    // a second gesture before the first settles is ignored
    assert_eq!(player.on_gesture(), None);
    media.run(&mut player, cmd);
    assert_eq!(player.state(), PlayerState::Playing);
    assert!(!player.prompt_visible());
    assert_eq!(player.on_gesture(), None);
}

#[test]
fn failed_gesture_stays_blocked_and_hides_prompt() {
    let mut player = Player::new(Playlist::default());
    player.on_play_settled(PlayReason::Autoplay, false, true);
    let cmd = player.on_gesture().unwrap();
    assert_eq!(cmd, Command::Play(PlayReason::Gesture));
    player.on_play_settled(PlayReason::Gesture, false, true);
    assert_eq!(player.state(), PlayerState::BlockedAwaitingGesture);
    assert!(!player.prompt_visible());
    assert!(player.on_gesture().is_some());
}

#[test]
fn double_toggle_leaves_icon_matching_media() {
    let mut player = Player::new(Playlist::default());
    let mut media = FakeMedia {
        paused: true,
        allow_play: true,
    };
    let cmd = player.start();
    media.run(&mut player, cmd);
    assert_eq!(player.state(), PlayerState::Playing);

    for _ in 0..2 {
        let cmd = player.toggle(media.paused);
        media.run(&mut player, cmd);
    }
    assert!(!media.paused);
    assert_eq!(icon_class(media.paused), ICON_PAUSE);
    assert_eq!(player.state(), PlayerState::Playing);

    let cmd = player.toggle(media.paused);
    media.run(&mut player, cmd);
    assert_eq!(icon_class(media.paused), ICON_PLAY);
    assert_eq!(player.state(), PlayerState::Paused);
}

#[test]
fn next_track_advances_and_requests_play() {
    let mut player = Player::new(Playlist::default());
    let (track, cmd) = player.next_track();
    assert_eq!(track.key, "truockhiemtontai");
    assert_eq!(cmd, Command::Play(PlayReason::NextTrack));
    assert_eq!(player.playlist().current().key, "truockhiemtontai");
}

#[test]
fn tracks_load_by_key_with_first_track_fallback() {
    let mut player = Player::new(Playlist::default());
    assert_eq!(player.load_track(FIRST_TRACK_KEY).key, TRACKS[0].key);
    assert_eq!(player.load_track("lancuoi").src, "lancuoi.mp3");
    assert_eq!(player.playlist().index(), 2);

    // next from the last track wraps through the key lookup
    let (track, _) = player.next_track();
    assert_eq!(track.key, FIRST_TRACK_KEY);
    assert_eq!(player.playlist().index(), 0);

    player.load_track("lancuoi");
    assert_eq!(player.load_track("no-such-song").key, FIRST_TRACK_KEY);
    assert_eq!(player.playlist().index(), 0);
}

#[test]
fn rejected_next_keeps_blocked_state() {
    let mut player = Player::new(Playlist::default());
    player.on_play_settled(PlayReason::Autoplay, false, true);
    let (_, cmd) = player.next_track();
    if let Command::Play(reason) = cmd {
        player.on_play_settled(reason, false, true);
    }
    assert_eq!(player.state(), PlayerState::BlockedAwaitingGesture);
    assert!(player.prompt_visible());
}
