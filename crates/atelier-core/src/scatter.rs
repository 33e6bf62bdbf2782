use crate::constants::*;
use glam::Vec2;
use rand::Rng;

/// Sampling ranges for the entrance scatter. Offsets and rotation are
/// symmetric around zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterBounds {
    pub x: f32,
    pub y: f32,
    pub rotation_deg: f32,
    pub scale_min: f32,
    pub scale_max: f32,
}

impl Default for ScatterBounds {
    fn default() -> Self {
        Self {
            x: SCATTER_X_RANGE,
            y: SCATTER_Y_RANGE,
            rotation_deg: SCATTER_ROTATION_RANGE,
            scale_min: SCATTER_SCALE_MIN,
            scale_max: SCATTER_SCALE_MAX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterPosition {
    pub offset: Vec2,
    pub rotation_deg: f32,
    pub scale: f32,
}

impl ScatterPosition {
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        rotation_deg: 0.0,
        scale: 1.0,
    };
}

#[inline]
fn symmetric<R: Rng + ?Sized>(rng: &mut R, half: f32) -> f32 {
    let h = half.abs();
    rng.gen_range(-h..=h)
}

pub fn random_scatter<R: Rng + ?Sized>(rng: &mut R, bounds: &ScatterBounds) -> ScatterPosition {
    let lo = bounds.scale_min.min(bounds.scale_max);
    let hi = bounds.scale_min.max(bounds.scale_max);
    ScatterPosition {
        offset: Vec2::new(symmetric(rng, bounds.x), symmetric(rng, bounds.y)),
        rotation_deg: symmetric(rng, bounds.rotation_deg),
        scale: rng.gen_range(lo..=hi),
    }
}

/// One independent sample per glyph.
pub fn scatter_all<R: Rng + ?Sized>(
    rng: &mut R,
    glyph_count: usize,
    bounds: &ScatterBounds,
) -> Vec<ScatterPosition> {
    (0..glyph_count).map(|_| random_scatter(rng, bounds)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn samples_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let b = ScatterBounds::default();
        for s in scatter_all(&mut rng, 500, &b) {
            assert!(s.offset.x.abs() <= b.x);
            assert!(s.offset.y.abs() <= b.y);
            assert!(s.rotation_deg.abs() <= b.rotation_deg);
            assert!(s.scale >= b.scale_min && s.scale <= b.scale_max);
        }
    }

    #[test]
    fn degenerate_bounds_are_accepted() {
        let mut rng = StdRng::seed_from_u64(1);
        let b = ScatterBounds {
            x: 0.0,
            y: 0.0,
            rotation_deg: 0.0,
            scale_min: 1.0,
            scale_max: 1.0,
        };
        assert_eq!(random_scatter(&mut rng, &b), ScatterPosition::IDENTITY);
    }
}
