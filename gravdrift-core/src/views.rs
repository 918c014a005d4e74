//! Per-frame snapshots handed to a renderer.
//!
//! Everything here is derived from simulation state so that a painter only has
//! to draw circles. Alphas use a 0..=255 scale and sizes are diameters.

use glam::Vec2;

use crate::color::{color_by_lifespan, Rgb};
use crate::engine::World;
use crate::math::map_range;
use crate::orb::Orb;
use crate::particle::Particle;

const PARTICLE_DIAMETER: f32 = 5.0;
const PARTICLE_GLOW_STEPS: u32 = 5;
const PARTICLE_GLOW_ALPHA: f32 = 60.0;
const TRAIL_GLOW_STEPS: u32 = 3;
const PARTICLE_GLOW_BOOST: f32 = 1.3;

const ORB_GLOW_STEPS: u32 = 8;
const ORB_GLOW_ALPHA: f32 = 30.0;
const ORB_GLOW_BOOST: f32 = 1.2;
const ORB_GRADIENT_STEPS: u32 = 20;
const ORB_GRADIENT_ALPHA: f32 = 50.0;
const ORB_OUTLINE_ALPHA: f32 = 200.0;
/// Fully absorbed orbs are drawn at this fraction of their alpha.
const ORB_DEPLETED_ALPHA: f32 = 0.4;
/// Orb fade-in alpha above which the gravity field is drawn.
pub const FIELD_VISIBLE_ALPHA: f32 = 0.8;

pub const POINTER_COLOR: Rgb = Rgb::new(255.0, 200.0, 50.0);
const POINTER_OUTLINE_DIAMETER: f32 = 40.0;
const POINTER_OUTLINE_ALPHA: f32 = 150.0;
const POINTER_FIELD_START: f32 = 70.0;
const POINTER_FIELD_END: f32 = 600.0;

const FIELD_RING_GROWTH: f32 = 1.5;

/// A circle at an entity's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub diameter: f32,
    pub color: Rgb,
    pub alpha: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub color: Rgb,
    pub alpha: f32,
    pub diameter: f32,
    pub glow: Vec<Ring>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleView {
    pub pos: Vec2,
    pub color: Rgb,
    pub alpha: f32,
    pub diameter: f32,
    /// Filled, largest first.
    pub glow: Vec<Ring>,
    /// Oldest first.
    pub trail: Vec<TrailPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    /// Fade alpha in [0, 1].
    pub alpha: f32,
    /// Fade alpha dimmed by absorption progress, in [0, 1].
    pub final_alpha: f32,
    pub gravity_strength: f32,
    /// Filled, largest first.
    pub glow: Vec<Ring>,
    /// Filled, largest first.
    pub gradient: Vec<Ring>,
    /// Stroked.
    pub outline: Ring,
    pub show_gravity_field: bool,
    /// Stroked, innermost first. Empty unless `show_gravity_field`.
    pub field: Vec<Ring>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointerFieldView {
    pub pos: Vec2,
    pub outline: Ring,
    pub field: Vec<Ring>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameView {
    pub pointer: Option<PointerFieldView>,
    pub orbs: Vec<OrbView>,
    pub particles: Vec<ParticleView>,
}

/// Concentric glow layers, outermost (`steps`) first, fading to zero at the rim.
fn glow_rings(steps: u32, base: f32, grow: f32, max_alpha: f32, color: Rgb) -> Vec<Ring> {
    (1..=steps)
        .rev()
        .map(|g| Ring {
            diameter: base + g as f32 * grow,
            color,
            alpha: map_range(g as f32, steps as f32, 0.0, 0.0, max_alpha),
        })
        .collect()
}

/// Rings multiplied outward by `FIELD_RING_GROWTH` from `start` while below `end`.
fn field_rings(start: f32, end: f32, fade_from: f32, color: Rgb, alpha_scale: f32) -> Vec<Ring> {
    let mut rings = Vec::new();
    let mut d = start;
    while d < end {
        rings.push(Ring {
            diameter: d,
            color,
            alpha: map_range(d, fade_from, end, 70.0, 20.0) * alpha_scale,
        });
        d *= FIELD_RING_GROWTH;
    }
    rings
}

/// Position of history index `i` along a trail of `n` points, in [0, 1].
/// A one-point trail is all head.
fn trail_fraction(i: usize, n: usize) -> f32 {
    if n <= 1 {
        1.0
    } else {
        i as f32 / (n - 1) as f32
    }
}

impl ParticleView {
    pub fn from_particle(particle: &Particle) -> Self {
        let fade = particle.death_alpha;
        let n = particle.history.len();
        let trail = particle
            .history
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let t = trail_fraction(i, n);
                let color = color_by_lifespan(entry.lifespan);
                let alpha = map_range(t, 0.0, 1.0, 50.0, 200.0) * fade;
                let diameter = map_range(t, 0.0, 1.0, 2.0, 4.0);
                TrailPoint {
                    pos: entry.pos,
                    color,
                    alpha,
                    diameter,
                    glow: glow_rings(
                        TRAIL_GLOW_STEPS,
                        diameter,
                        2.0,
                        alpha * 0.3,
                        color.boosted(PARTICLE_GLOW_BOOST),
                    ),
                }
            })
            .collect();

        let color = color_by_lifespan(particle.lifespan);
        let mut glow = glow_rings(
            PARTICLE_GLOW_STEPS,
            PARTICLE_DIAMETER,
            2.0,
            PARTICLE_GLOW_ALPHA,
            color.boosted(PARTICLE_GLOW_BOOST),
        );
        for ring in &mut glow {
            ring.alpha *= fade;
        }

        Self {
            pos: particle.pos,
            color,
            alpha: 255.0 * fade,
            diameter: PARTICLE_DIAMETER,
            glow,
            trail,
        }
    }
}

impl OrbView {
    pub fn from_orb(orb: &Orb) -> Self {
        let dim = map_range(orb.absorption_progress(), 0.0, 1.0, 1.0, ORB_DEPLETED_ALPHA);
        let final_alpha = orb.alpha * dim;

        let mut glow = glow_rings(
            ORB_GLOW_STEPS,
            orb.size * 2.0,
            4.0,
            ORB_GLOW_ALPHA,
            orb.color.boosted(ORB_GLOW_BOOST),
        );
        for ring in &mut glow {
            ring.alpha *= final_alpha;
        }

        let steps = ORB_GRADIENT_STEPS as f32;
        let gradient = (0..ORB_GRADIENT_STEPS)
            .map(|i| {
                let i = i as f32;
                Ring {
                    diameter: (orb.size / steps) * (steps - i) * 2.0,
                    color: orb.color,
                    alpha: map_range(i, 0.0, steps, 0.0, ORB_GRADIENT_ALPHA) * final_alpha,
                }
            })
            .collect();

        let show_gravity_field = orb.alpha > FIELD_VISIBLE_ALPHA;
        let field = if show_gravity_field {
            let max_diameter = map_range(orb.gravity_strength, 500.0, 1500.0, 250.0, 600.0);
            field_rings(
                orb.size * 2.0 + 30.0,
                max_diameter,
                orb.size * 2.0,
                orb.color,
                0.3 + final_alpha,
            )
        } else {
            Vec::new()
        };

        Self {
            pos: orb.pos,
            radius: orb.size,
            color: orb.color,
            alpha: orb.alpha,
            final_alpha,
            gravity_strength: orb.gravity_strength,
            glow,
            gradient,
            outline: Ring {
                diameter: orb.size * 2.0,
                color: orb.color,
                alpha: ORB_OUTLINE_ALPHA * final_alpha,
            },
            show_gravity_field,
            field,
        }
    }
}

impl PointerFieldView {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            outline: Ring {
                diameter: POINTER_OUTLINE_DIAMETER,
                color: POINTER_COLOR,
                alpha: POINTER_OUTLINE_ALPHA,
            },
            field: field_rings(
                POINTER_FIELD_START,
                POINTER_FIELD_END,
                POINTER_OUTLINE_DIAMETER,
                POINTER_COLOR,
                1.0,
            ),
        }
    }
}

/// Snapshot of the world in draw order: pointer field, orbs, then particles.
pub fn frame_view(world: &World) -> FrameView {
    FrameView {
        pointer: world.gravity_source.map(PointerFieldView::at),
        orbs: world.orbs.iter().map(OrbView::from_orb).collect(),
        particles: world.particles.iter().map(ParticleView::from_particle).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_rings_fade_toward_the_rim() {
        let rings = glow_rings(5, 5.0, 2.0, 60.0, Rgb::BLUE);
        assert_eq!(rings.len(), 5);
        assert_eq!(rings[0].diameter, 15.0);
        assert_eq!(rings[0].alpha, 0.0);
        assert_eq!(rings[4].diameter, 7.0);
        assert_eq!(rings[4].alpha, 48.0);
    }

    #[test]
    fn pointer_field_grows_geometrically_below_limit() {
        let view = PointerFieldView::at(Vec2::new(10.0, 10.0));
        let diameters: Vec<f32> = view.field.iter().map(|r| r.diameter).collect();
        assert_eq!(diameters.len(), 6);
        assert_eq!(diameters[0], 70.0);
        assert!(diameters.iter().all(|d| *d < 600.0));
        assert!(diameters.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn single_point_trail_uses_head_values() {
        assert_eq!(trail_fraction(0, 1), 1.0);
        assert_eq!(trail_fraction(0, 3), 0.0);
        assert_eq!(trail_fraction(2, 3), 1.0);
    }
}
