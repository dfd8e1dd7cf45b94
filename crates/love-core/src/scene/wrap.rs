use glam::Vec3;
use rand::Rng;

/// Respawn rule for drifting objects: once an object is farther than
/// `threshold` from the origin it is moved to a uniform point inside the box
/// `center ± extent / 2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrapBounds {
    pub threshold: f32,
    pub extent: Vec3,
    pub center: Vec3,
}

impl WrapBounds {
    pub fn cube(threshold: f32, extent: f32) -> Self {
        Self {
            threshold,
            extent: Vec3::splat(extent),
            center: Vec3::ZERO,
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let r = Vec3::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>());
        self.center + (r - Vec3::splat(0.5)) * self.extent
    }

    #[inline]
    pub fn exceeded(&self, position: Vec3) -> bool {
        position.length() > self.threshold
    }

    /// Returns true when the position was reset.
    pub fn wrap<R: Rng + ?Sized>(&self, position: &mut Vec3, rng: &mut R) -> bool {
        if !self.exceeded(*position) {
            return false;
        }
        *position = self.sample(rng);
        true
    }
}

#[inline]
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.gen::<f32>() - 0.5,
        rng.gen::<f32>() - 0.5,
        rng.gen::<f32>() - 0.5,
    )
    .try_normalize()
    .unwrap_or(Vec3::X)
}

/// Uniform sample in `[min, min + span)`.
#[inline]
pub fn span<R: Rng + ?Sized>(rng: &mut R, min: f32, span: f32) -> f32 {
    min + rng.gen::<f32>() * span
}
