use love_core::{ConfigError, ShowConfig};

#[test]
fn defaults_match_page_contract() {
    let c = ShowConfig::default();
    assert_eq!(c.element_count(), 100);
    assert_eq!(c.speed(), 1.0);
    assert_eq!(c.user_scale(), 0.75);
    assert!(!c.is_mobile);
}

#[test]
fn empty_stage_is_rejected() {
    assert_eq!(ShowConfig::new(0, false), Err(ConfigError::EmptyStage));
}

#[test]
fn invalid_speed_leaves_config_untouched() {
    let mut c = ShowConfig::new(10, true).unwrap();
    for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        assert!(matches!(c.set_speed(bad), Err(ConfigError::InvalidSpeed(_))));
    }
    assert_eq!(c.speed(), 1.0);
    c.set_speed(2.5).unwrap();
    assert_eq!(c.speed(), 2.5);
}

#[test]
fn pick_selects_by_device_class() {
    let desktop = ShowConfig::new(1, false).unwrap();
    let mobile = ShowConfig::new(1, true).unwrap();
    assert_eq!(desktop.pick((1000, 500)), 1000);
    assert_eq!(mobile.pick((1000, 500)), 500);
}
