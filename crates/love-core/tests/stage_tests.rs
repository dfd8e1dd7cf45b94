// Host-side tests for the love stage descriptors: phrases, elements, stars.

use love_core::constants::*;
use love_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn every_phrase_normalizes_to_fixed_width() {
    for p in PHRASES {
        let n = normalize_phrase(p, PHRASE_WIDTH);
        assert_eq!(n.chars().count(), PHRASE_WIDTH, "phrase {p:?}");
        assert!(n.contains(p), "phrase {p:?} lost its text");
    }
}

#[test]
fn normalize_centres_with_extra_filler_on_the_right() {
    let n = normalize_phrase("abc", 6);
    let chars: Vec<char> = n.chars().collect();
    assert_eq!(chars[0], PHRASE_FILLER);
    assert_eq!(&n[PHRASE_FILLER.len_utf8()..PHRASE_FILLER.len_utf8() + 3], "abc");
    assert_eq!(chars[4], PHRASE_FILLER);
    assert_eq!(chars[5], PHRASE_FILLER);
}

#[test]
fn normalize_truncates_long_phrases() {
    let n = normalize_phrase("Ich liebe dich sehr", 14);
    assert_eq!(n, "Ich liebe dich");
    assert_eq!(normalize_phrase("", 3).chars().count(), 3);
}

#[test]
fn default_stage_uses_base_durations() {
    let mut rng = StdRng::seed_from_u64(7);
    let elements = generate_elements(DEFAULT_ELEMENT_COUNT, 1.0, &mut rng);
    assert_eq!(elements.len(), 100);
    for el in &elements {
        assert_eq!(el.timing.horizontal_ms, 10_000.0);
        assert_eq!(el.timing.vertical_ms, 20_000.0);
        assert_eq!(el.text.chars().count(), PHRASE_WIDTH);
    }
}

#[test]
fn durations_scale_inversely_with_speed() {
    for speed in [0.25f32, 0.5, 1.0, 1.5, 3.0, 10.0] {
        let t = AnimationTiming::for_speed(speed);
        assert!((t.horizontal_ms - HORIZONTAL_BASE_MS / speed).abs() < 1e-3);
        assert!((t.vertical_ms - VERTICAL_BASE_MS / speed).abs() < 1e-3);
    }
}

#[test]
fn apply_speed_retimes_every_element() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut elements = generate_elements(10, 1.0, &mut rng);
    apply_speed(&mut elements, 2.0);
    assert!(elements
        .iter()
        .all(|e| e.timing.horizontal_ms == 5_000.0 && e.timing.vertical_ms == 10_000.0));
}

#[test]
fn delays_stagger_backwards_and_only_the_last_is_special() {
    let mut rng = StdRng::seed_from_u64(3);
    let elements = generate_elements(5, 1.0, &mut rng);
    let delays: Vec<f32> = elements.iter().map(|e| e.delay_ms).collect();
    assert_eq!(delays, vec![0.0, -300.0, -600.0, -900.0, -1200.0]);
    assert!(delays[0].is_sign_positive());
    let special: Vec<usize> = elements.iter().filter(|e| e.special).map(|e| e.index).collect();
    assert_eq!(special, vec![4]);
}

#[test]
fn play_state_toggles_and_maps_to_css() {
    assert_eq!(PlayState::Running.as_css(), "running");
    assert_eq!(PlayState::Paused.as_css(), "paused");
    assert_eq!(PlayState::Running.toggled().toggled(), PlayState::Running);
}

#[test]
fn starfield_counts_follow_device_class() {
    let mut rng = StdRng::seed_from_u64(11);
    for (mobile, dots, shooting) in [(false, 500, 3), (true, 250, 1)] {
        let stars = generate_starfield(mobile, &mut rng);
        let n_shooting = stars.iter().filter(|s| s.kind == StarKind::Shooting).count();
        assert_eq!(stars.len(), dots + shooting);
        assert_eq!(n_shooting, shooting);
        // shooting stars come last
        assert!(stars[dots..].iter().all(|s| s.kind == StarKind::Shooting));
    }
}

#[test]
fn stars_stay_inside_their_ranges() {
    let mut rng = StdRng::seed_from_u64(5);
    for s in generate_starfield(false, &mut rng) {
        assert!((0.0..100.0).contains(&s.left_pct));
        assert!((0.0..100.0).contains(&s.top_pct));
        let max = match s.kind {
            StarKind::Dot(_) => STAR_DELAY_MAX_SEC,
            StarKind::Shooting => SHOOTING_STAR_DELAY_MAX_SEC,
        };
        assert!((0.0..max).contains(&s.delay_sec));
        assert!(s.class_name().starts_with("star "));
    }
}
