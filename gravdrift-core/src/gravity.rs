use glam::Vec2;

use crate::config::MIN_GRAVITY_DISTANCE;

/// Inverse-square pull exerted on a body by one gravity source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attraction {
    /// Force vector pointing from the body toward the source.
    pub force: Vec2,
    /// Scalar magnitude `source_strength / distance²`.
    pub strength: f32,
}

/// Computes the attraction of a source at `source` with `source_strength` on
/// a body at `body`.
///
/// The separation is clamped to `MIN_GRAVITY_DISTANCE` so the magnitude stays
/// finite; a body exactly on the source gets a zero direction.
pub fn attraction(body: Vec2, source: Vec2, source_strength: f32) -> Attraction {
    let r = source - body;
    let distance = r.length().max(MIN_GRAVITY_DISTANCE);
    let strength = source_strength / (distance * distance);
    Attraction {
        force: r.normalize_or_zero() * strength,
        strength,
    }
}
