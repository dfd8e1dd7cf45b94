use crate::constants::*;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarSize {
    Small,
    Medium,
    Large,
}

impl StarSize {
    pub const ALL: [StarSize; 3] = [StarSize::Small, StarSize::Medium, StarSize::Large];

    pub fn class_name(self) -> &'static str {
        match self {
            StarSize::Small => "small",
            StarSize::Medium => "medium",
            StarSize::Large => "large",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StarKind {
    Dot(StarSize),
    Shooting,
}

/// A background star; coordinates are percentages of the star container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub left_pct: f32,
    pub top_pct: f32,
    pub delay_sec: f32,
    pub kind: StarKind,
}

impl Star {
    pub fn class_name(&self) -> String {
        match self.kind {
            StarKind::Dot(size) => format!("star {}", size.class_name()),
            StarKind::Shooting => "star shooting".to_string(),
        }
    }
}

fn scatter<R: Rng + ?Sized>(rng: &mut R, kind: StarKind, max_delay: f32) -> Star {
    Star {
        left_pct: rng.gen::<f32>() * 100.0,
        top_pct: rng.gen::<f32>() * 100.0,
        delay_sec: rng.gen::<f32>() * max_delay,
        kind,
    }
}

/// Dots first, then the shooting stars.
pub fn generate_starfield<R: Rng + ?Sized>(is_mobile: bool, rng: &mut R) -> Vec<Star> {
    let (dots, shooting) = if is_mobile {
        (STARS_MOBILE, SHOOTING_STARS_MOBILE)
    } else {
        (STARS_DESKTOP, SHOOTING_STARS_DESKTOP)
    };
    let mut stars = Vec::with_capacity(dots + shooting);
    for _ in 0..dots {
        let size = StarSize::ALL[rng.gen_range(0..StarSize::ALL.len())];
        stars.push(scatter(rng, StarKind::Dot(size), STAR_DELAY_MAX_SEC));
    }
    for _ in 0..shooting {
        stars.push(scatter(rng, StarKind::Shooting, SHOOTING_STAR_DELAY_MAX_SEC));
    }
    stars
}
