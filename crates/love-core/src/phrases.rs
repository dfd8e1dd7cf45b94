use crate::constants::{PHRASE_FILLER, PHRASE_WIDTH};
use rand::Rng;

/// Multilingual phrase table the stage draws from.
pub const PHRASES: [&str; 15] = [
    "I Love You",
    "Je t'aime",
    "Te amo",
    "Ich liebe dich",
    "Ti amo",
    "Te quiero",
    "愛してる",
    "사랑해",
    "我爱你",
    "أحبك",
    "iu cún",
    "❤️",
    "💕",
    "💖",
    "💝",
];

pub fn random_phrase<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PHRASES[rng.gen_range(0..PHRASES.len())]
}

/// Fit `phrase` to exactly `width` codepoints.
///
/// Longer phrases are truncated; shorter ones are centred between
/// non-breaking fillers (the extra filler goes on the right).
pub fn normalize_phrase(phrase: &str, width: usize) -> String {
    let len = phrase.chars().count();
    if len >= width {
        return phrase.chars().take(width).collect();
    }
    let pad = width - len;
    let left = pad / 2;
    let mut out = String::with_capacity(phrase.len() + pad * PHRASE_FILLER.len_utf8());
    out.extend(std::iter::repeat(PHRASE_FILLER).take(left));
    out.push_str(phrase);
    out.extend(std::iter::repeat(PHRASE_FILLER).take(pad - left));
    out
}

#[inline]
pub fn normalized_random_phrase<R: Rng + ?Sized>(rng: &mut R) -> String {
    normalize_phrase(random_phrase(rng), PHRASE_WIDTH)
}
