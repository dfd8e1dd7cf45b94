use glam::Vec3;

/// `0xRRGGBB` to linear-ish RGB in [0,1].
#[inline]
pub fn hex_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[inline]
pub fn hex_vec3(hex: u32) -> Vec3 {
    Vec3::from_array(hex_rgb(hex))
}

fn hue_to_channel(lo: f32, hi: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return lo + (hi - lo) * 6.0 * t;
    }
    if t < 0.5 {
        return hi;
    }
    if t < 2.0 / 3.0 {
        return lo + (hi - lo) * 6.0 * (2.0 / 3.0 - t);
    }
    lo
}

/// HSL to RGB with hue wrapped into [0,1) and saturation/lightness clamped.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return [l, l, l];
    }
    let hi = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let lo = 2.0 * l - hi;
    [
        hue_to_channel(lo, hi, h + 1.0 / 3.0),
        hue_to_channel(lo, hi, h),
        hue_to_channel(lo, hi, h - 1.0 / 3.0),
    ]
}
