use love_core::layout::*;

const IPHONE_UA: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) Mobile Safari/537.36";
const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/128.0";

#[test]
fn mobile_detection_is_case_insensitive() {
    assert!(is_mobile_user_agent(IPHONE_UA));
    assert!(is_mobile_user_agent(ANDROID_UA));
    assert!(is_mobile_user_agent("some IPAD browser"));
    assert!(!is_mobile_user_agent(DESKTOP_UA));
}

#[test]
fn desktop_without_special_match_scales_by_one() {
    let p = DeviceProfile::from_user_agent(DESKTOP_UA, 1920, 1080, 1.0, false);
    assert_eq!(device_scale(&p), 1.0);
}

#[test]
fn plain_mobile_scales_by_point_nine() {
    let p = DeviceProfile::from_user_agent(ANDROID_UA, 412, 915, 2.625, true);
    assert_eq!(device_scale(&p), 0.9);
}

#[test]
fn iphone_11_portrait_scales_by_point_eight() {
    let by_screen = DeviceProfile::from_user_agent(IPHONE_UA, 414, 896, 3.0, true);
    assert_eq!(device_scale(&by_screen), 0.8);
    // screen matched in landscape numbers too
    let rotated = DeviceProfile::from_user_agent(IPHONE_UA, 896, 414, 3.0, true);
    assert_eq!(device_scale(&rotated), 0.8);
    let by_ratio = DeviceProfile::from_user_agent(IPHONE_UA, 390, 844, 2.0, true);
    assert_eq!(device_scale(&by_ratio), 0.8);
}

#[test]
fn iphone_in_landscape_or_unmatched_falls_back_to_mobile() {
    let landscape = DeviceProfile::from_user_agent(IPHONE_UA, 414, 896, 2.0, false);
    assert_eq!(device_scale(&landscape), 0.9);
    let other = DeviceProfile::from_user_agent(IPHONE_UA, 430, 932, 3.0, true);
    assert_eq!(device_scale(&other), 0.9);
}

#[test]
fn portrait_from_query_or_aspect() {
    assert!(is_portrait(true, 1000.0, 500.0));
    assert!(is_portrait(false, 500.0, 1000.0));
    assert!(!is_portrait(false, 1000.0, 500.0));
}

#[test]
fn stage_scale_uses_shorter_side() {
    let base = base_stage_scale(1800.0, 900.0);
    assert!((base - 0.95).abs() < 1e-6);
    let s = stage_scale(1800.0, 900.0, 0.9, 0.75);
    assert!((s - 0.95 * 0.9 * 0.75).abs() < 1e-6);
    // idempotent
    assert_eq!(s, stage_scale(1800.0, 900.0, 0.9, 0.75));
}
