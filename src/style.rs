// Inline style values written by the DOM adapters.

#[inline]
pub fn scale_transform(scale: f32) -> String {
    format!("scale({})", scale)
}

#[inline]
pub fn millis(ms: f32) -> String {
    format!("{}ms", ms)
}

#[inline]
pub fn seconds(sec: f32) -> String {
    format!("{}s", sec)
}

#[inline]
pub fn percent(pct: f32) -> String {
    format!("{}%", pct)
}
