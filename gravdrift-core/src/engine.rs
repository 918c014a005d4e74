use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::orb::{Orb, OrbId};
use crate::particle::Particle;

/// Drawable area in canvas units, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    width: f32,
    height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Result<Self, SimError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SimError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// True when `pos` lies within the canvas grown by `margin` on every side.
    pub fn contains_with_margin(&self, pos: Vec2, margin: f32) -> bool {
        pos.x >= -margin
            && pos.x <= self.width + margin
            && pos.y >= -margin
            && pos.y <= self.height + margin
    }
}

/// All live simulation state
#[derive(Debug)]
pub struct World {
    pub particles: Vec<Particle>,
    pub orbs: Vec<Orb>,
    /// Present only while the pointer is held down.
    pub gravity_source: Option<Vec2>,
    pub canvas: Canvas,
    pub spawning: bool,
    pub rng: StdRng,
    next_orb_id: u64,
}

impl World {
    pub fn new(config: &SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            particles: Vec::new(),
            orbs: Vec::new(),
            gravity_source: None,
            canvas: config.canvas,
            spawning: config.spawning,
            rng,
            next_orb_id: 0,
        }
    }

    /// Spawns an orb at `pos` and returns its id.
    pub fn spawn_orb(&mut self, pos: Vec2, absorption_count_at_birth: usize, now: f64) -> OrbId {
        let id = OrbId(self.next_orb_id);
        self.next_orb_id += 1;
        let orb = Orb::spawn(id, pos, absorption_count_at_birth, &mut self.rng, now);
        tracing::info!(
            orb = id.0,
            x = pos.x,
            y = pos.y,
            size = orb.size,
            required = orb.required_particles,
            "orb spawned"
        );
        self.orbs.push(orb);
        id
    }

    pub fn set_canvas(&mut self, canvas: Canvas) {
        self.canvas = canvas;
    }
}
