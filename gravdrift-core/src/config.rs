//! Fixed simulation constants and the environment a world is built in.
//!
//! Times are in milliseconds, distances in canvas units and speeds in
//! units per frame.

use crate::engine::Canvas;

/// Strength of the pointer-held gravity source.
pub const POINTER_GRAVITY: f32 = 1500.0;
/// Gravity separations are clamped to at least this distance.
pub const MIN_GRAVITY_DISTANCE: f32 = 1.0;

pub const MAX_PARTICLES: usize = 150;
pub const SPAWN_PROBABILITY: f64 = 0.4;

pub const MAX_LIFESPAN: u32 = 100;
pub const BASE_DECAY_INTERVAL: f32 = 30.0;
pub const FADE_TRAIL_LENGTH: u32 = 10;
pub const MAX_SPEED: f32 = 6.0;
pub const MIN_SPAWN_SPEED: f32 = 1.0;
pub const MAX_SPAWN_SPEED: f32 = 3.0;
pub const PARTICLE_FADE_OUT_MS: f64 = 200.0;
pub const OFF_CANVAS_MARGIN: f32 = 50.0;

pub const ABSORPTION_RADIUS: f32 = 7.0;
pub const ORB_FADE_IN_MS: f64 = 500.0;
pub const ORB_FADE_OUT_MS: f64 = 300.0;
pub const ORB_GRACE_MS: f64 = 4000.0;
pub const ORB_MIN_SIZE: f32 = 15.0;
pub const ORB_MAX_SIZE: f32 = 60.0;
pub const ORB_MIN_GRAVITY: f32 = 500.0;
pub const ORB_MAX_GRAVITY: f32 = 1500.0;
pub const ORB_MIN_REQUIRED: f32 = 15.0;
pub const ORB_MAX_REQUIRED: f32 = 50.0;
/// Absorption counts mapped onto the orb size range.
pub const ORB_BIRTH_COUNT_LOW: f32 = 10.0;
pub const ORB_BIRTH_COUNT_HIGH: f32 = 40.0;

pub const RELEASE_RADIUS: f32 = 6.0;
pub const RELEASE_THRESHOLD: usize = 10;

/// Environment for a new world: canvas bounds and RNG seeding.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub canvas: Canvas,
    /// `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Whether particles are spawned at the canvas edges each frame.
    pub spawning: bool,
}

impl SimConfig {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            seed: None,
            spawning: true,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_spawning(mut self, spawning: bool) -> Self {
        self.spawning = spawning;
        self
    }
}
