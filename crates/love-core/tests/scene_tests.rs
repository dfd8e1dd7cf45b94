use glam::Vec3;
use love_core::constants::*;
use love_core::scene::*;
use love_core::ShowConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn scene(mobile: bool) -> SceneState {
    let config = ShowConfig::new(1, mobile).unwrap();
    SceneState::new(&config, 16.0 / 9.0, 42)
}

#[test]
fn object_counts_follow_device_class() {
    for (mobile, pick) in [(false, 0usize), (true, 1usize)] {
        let s = scene(mobile);
        let n = |c: (usize, usize)| if pick == 0 { c.0 } else { c.1 };
        assert_eq!(s.glow.len(), n(GLOW_PARTICLES));
        assert_eq!(s.galaxy.len(), n(GALAXY_PARTICLES));
        assert_eq!(s.reactive.len(), n(REACTIVE_PARTICLES));
        assert_eq!(s.floating_hearts.len(), n(FLOATING_HEARTS));
        assert_eq!(s.light_trails.len(), n(LIGHT_TRAILS));
        assert_eq!(s.rainbow_trails.len(), n(RAINBOW_TRAILS));
        assert_eq!(s.lights.point_lights().count(), MAX_POINT_LIGHTS);
    }
}

/// Farthest a respawned object can land from the origin.
fn max_respawn_distance(b: &WrapBounds) -> f32 {
    (b.center.abs() + b.extent * 0.5).length()
}

#[test]
fn respawn_boxes_fit_inside_thresholds() {
    let s = scene(false);
    for t in s.trails() {
        assert!(max_respawn_distance(&t.bounds) <= t.bounds.threshold);
    }
    let hb = floating_heart_bounds();
    assert!(max_respawn_distance(&hb) <= hb.threshold);
}

#[test]
fn wrap_resets_far_objects_within_threshold() {
    let mut rng = StdRng::seed_from_u64(9);
    let bounds = WrapBounds::cube(20.0, 20.0);
    for _ in 0..500 {
        let mut p = Vec3::new(30.0, -5.0, 2.0);
        assert!(bounds.wrap(&mut p, &mut rng));
        assert!(p.length() <= bounds.threshold);
    }
    let mut near = Vec3::new(1.0, 1.0, 1.0);
    assert!(!bounds.wrap(&mut near, &mut rng));
    assert_eq!(near, Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn trails_never_render_beyond_threshold() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut trails: Vec<Trail> = (0..4).map(|_| Trail::rainbow(&mut rng)).collect();
    for t in &mut trails {
        t.speed = 3.0;
    }
    let mut wrapped = 0;
    for _ in 0..200 {
        wrapped += update_trails(&mut trails, 1.0, &mut rng);
        for t in &trails {
            assert!(t.position.length() <= t.bounds.threshold);
        }
    }
    assert!(wrapped > 0);
}

#[test]
fn floating_hearts_wrap_too() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut hearts = vec![FloatingHeart::spawn(&mut rng)];
    hearts[0].position = Vec3::new(0.0, 25.0, 0.0);
    assert_eq!(update_floating_hearts(&mut hearts, 1.0, 1.0, &mut rng), 1);
    assert!(hearts[0].position.length() <= FLOATING_HEART_WRAP);
}

#[test]
fn update_clamps_dt_and_tracks_time() {
    let mut s = scene(true);
    s.update(5.0, 0.5);
    assert!((s.time - MAX_FRAME_DT_SEC).abs() < 1e-6);
    assert_eq!(s.amplitude, 0.5);
    s.update(-1.0, 3.0);
    assert!((s.time - MAX_FRAME_DT_SEC).abs() < 1e-6);
    assert_eq!(s.amplitude, 1.0);
}

#[test]
fn center_heart_follows_its_clock() {
    let mut h = CenterHeart::default();
    let t = 1.3f32;
    h.update(t);
    assert!((h.rotation.y - 0.5 * t).abs() < 1e-6);
    assert!((h.rotation.z - 0.1 * t.sin()).abs() < 1e-6);
    assert!((h.scale - (0.5 + 0.05 * (2.0 * t).sin())).abs() < 1e-6);
}

#[test]
fn camera_orbits_origin_at_fixed_depth() {
    let mut s = scene(false);
    s.update(0.1, 0.0);
    let eye = s.camera.eye;
    let t = s.time;
    assert!((eye.x - 2.0 * (0.2 * t).sin()).abs() < 1e-5);
    assert!((eye.y - (0.3 * t).cos()).abs() < 1e-5);
    assert_eq!(eye.z, CAMERA_Z);
    assert_eq!(s.camera.target, Vec3::ZERO);
    s.resize(800, 400);
    assert_eq!(s.camera.aspect, 2.0);
}

#[test]
fn spinning_clouds_rotate_but_reactive_stays() {
    let mut s = scene(true);
    s.update(0.1, 0.0);
    assert!(s.glow.rotation.y > 0.0);
    assert!(s.galaxy.rotation.x > 0.0);
    assert_eq!(s.reactive.rotation, Vec3::ZERO);
}

#[test]
fn orbit_lights_keep_radius_and_height() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut rig = LightRig::new(&mut rng);
    rig.update(12.0);
    for o in &rig.orbiters {
        let p = o.light.position;
        assert!((Vec3::new(p.x, 0.0, p.z).length() - o.radius).abs() < 1e-3);
        assert_eq!(p.y, o.height);
    }
    assert_eq!(rig.point_lights().next().unwrap().position, Vec3::new(0.0, 0.0, 2.0));
}

#[test]
fn heart_geometry_is_closed_and_indexed_in_range() {
    let geo = heart_geometry(HEART_DEPTH, HEART_CURVE_SEGMENTS);
    assert!(!geo.vertices.is_empty());
    assert_eq!(geo.indices.len() % 3, 0);
    assert!(geo.indices.iter().all(|&i| (i as usize) < geo.vertices.len()));
    for v in &geo.vertices {
        assert!(v.position[2] >= 0.0 && v.position[2] <= HEART_DEPTH + 1e-6);
        let n = Vec3::from_array(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-4 || n == Vec3::ZERO);
    }
}

#[test]
fn heart_outline_lobes_mirror_each_other() {
    let [left, right] = heart_outline(8);
    assert_eq!(left.len(), right.len());
    for (l, r) in left.iter().zip(&right) {
        assert!((l.x + r.x).abs() < 1e-6);
        assert!((l.y - r.y).abs() < 1e-6);
    }
    assert!(signed_area(&left).abs() > 0.0);
}

#[test]
fn trail_segments_match_vertex_count() {
    let mut rng = StdRng::seed_from_u64(12);
    let t = Trail::light(&mut rng);
    let mut out = Vec::new();
    t.append_segments(&mut out);
    assert_eq!(out.len(), t.segment_vertex_count());
    assert!(out.iter().all(|v| v.color[3] == LIGHT_TRAIL_OPACITY));
}
