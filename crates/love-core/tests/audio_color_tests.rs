use love_core::audio::*;
use love_core::color::*;

#[test]
fn amplitude_is_normalized_average() {
    assert_eq!(average_amplitude(&[]), 0.0);
    assert_eq!(average_amplitude(&[255; 128]), 1.0);
    assert_eq!(average_amplitude(&[0; 128]), 0.0);
    assert!((average_amplitude(&[0, 255]) - 0.5).abs() < 1e-6);
}

#[test]
fn missing_analysis_reads_as_silence() {
    let off = Capabilities::default();
    assert_eq!(off.amplitude(Some(0.8)), 0.0);
    let on = Capabilities {
        audio_analysis_available: true,
    };
    assert_eq!(on.amplitude(Some(0.8)), 0.8);
    assert_eq!(on.amplitude(None), 0.0);
}

#[test]
fn hex_colors_unpack_channels() {
    assert_eq!(hex_rgb(0xff0000), [1.0, 0.0, 0.0]);
    let pink = hex_rgb(0xff69b4);
    assert!((pink[1] - 105.0 / 255.0).abs() < 1e-6);
    assert!((pink[2] - 180.0 / 255.0).abs() < 1e-6);
}

#[test]
fn hsl_matches_reference_points() {
    let close = |a: [f32; 3], b: [f32; 3]| a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-5);
    assert!(close(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]));
    assert!(close(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), [0.0, 1.0, 0.0]));
    assert!(close(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), [0.0, 0.0, 1.0]));
    assert!(close(hsl_to_rgb(0.5, 0.0, 0.3), [0.3, 0.3, 0.3]));
    // hue wraps
    assert!(close(hsl_to_rgb(1.25, 0.8, 0.6), hsl_to_rgb(0.25, 0.8, 0.6)));
}
