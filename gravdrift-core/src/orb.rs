//! Stationary gravitational sinks formed from released particle clusters.

use glam::Vec2;
use rand::Rng;

use crate::color::Rgb;
use crate::config::{
    ABSORPTION_RADIUS, ORB_BIRTH_COUNT_HIGH, ORB_BIRTH_COUNT_LOW, ORB_FADE_IN_MS,
    ORB_FADE_OUT_MS, ORB_GRACE_MS, ORB_MAX_GRAVITY, ORB_MAX_REQUIRED, ORB_MAX_SIZE,
    ORB_MIN_GRAVITY, ORB_MIN_REQUIRED, ORB_MIN_SIZE,
};
use crate::math::{fade, map_clamped, map_range};

/// Identifies an orb for the lifetime of a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrbId(pub u64);

/// Fade state of an orb. Stable orbs are `Active` with alpha at 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbPhase {
    Active,
    Dying { since: f64 },
}

#[derive(Debug, Clone)]
pub struct Orb {
    pub id: OrbId,
    pub pos: Vec2,
    pub size: f32,
    pub gravity_strength: f32,
    pub required_particles: u32,
    pub absorbed_particles: u32,
    pub color: Rgb,
    pub alpha: f32,
    pub phase: OrbPhase,
    pub created_at: f64,
}

/// Orb size for the number of particles gathered at its birth.
pub fn size_for_count(count: usize) -> f32 {
    map_clamped(
        count as f32,
        ORB_BIRTH_COUNT_LOW,
        ORB_BIRTH_COUNT_HIGH,
        ORB_MIN_SIZE,
        ORB_MAX_SIZE,
    )
}

impl Orb {
    /// Creates an orb with a random color between yellow and blue.
    pub fn spawn<R: Rng + ?Sized>(
        id: OrbId,
        pos: Vec2,
        absorption_count_at_birth: usize,
        rng: &mut R,
        now: f64,
    ) -> Self {
        let t: f32 = rng.gen_range(0.0..1.0);
        Self::with_color(id, pos, absorption_count_at_birth, Rgb::YELLOW.lerp(Rgb::BLUE, t), now)
    }

    pub fn with_color(
        id: OrbId,
        pos: Vec2,
        absorption_count_at_birth: usize,
        color: Rgb,
        now: f64,
    ) -> Self {
        let size = size_for_count(absorption_count_at_birth);
        let gravity_strength = map_range(
            size,
            ORB_MIN_SIZE,
            ORB_MAX_SIZE,
            ORB_MIN_GRAVITY,
            ORB_MAX_GRAVITY,
        );
        let required_particles = map_range(
            size,
            ORB_MIN_SIZE,
            ORB_MAX_SIZE,
            ORB_MIN_REQUIRED,
            ORB_MAX_REQUIRED,
        )
        .floor() as u32;

        Self {
            id,
            pos,
            size,
            gravity_strength,
            required_particles,
            absorbed_particles: 0,
            color,
            alpha: 0.0,
            phase: OrbPhase::Active,
            created_at: now,
        }
    }

    pub fn step(&mut self, now: f64) {
        self.alpha = match self.phase {
            OrbPhase::Active => fade(now - self.created_at, ORB_FADE_IN_MS, 0.0, 1.0),
            OrbPhase::Dying { since } => fade(now - since, ORB_FADE_OUT_MS, 1.0, 0.0),
        };
    }

    pub fn is_dying(&self) -> bool {
        matches!(self.phase, OrbPhase::Dying { .. })
    }

    /// Orbs ignore particles for a grace period after creation.
    pub fn can_absorb(&self, now: f64) -> bool {
        now - self.created_at > ORB_GRACE_MS
    }

    pub fn is_in_range(&self, point: Vec2, now: f64) -> bool {
        self.can_absorb(now) && !self.is_dying() && self.pos.distance(point) < ABSORPTION_RADIUS
    }

    /// Counts one absorbed particle and starts dying once the quota is met.
    ///
    /// The check is `>=`, so a caller that absorbs past the quota is tolerated
    /// rather than rejected.
    pub fn absorb(&mut self, now: f64) {
        self.absorbed_particles += 1;
        if self.absorbed_particles >= self.required_particles {
            self.start_death(now);
        }
    }

    /// Latched: a second call keeps the original death timestamp.
    pub fn start_death(&mut self, now: f64) {
        if !self.is_dying() {
            self.phase = OrbPhase::Dying { since: now };
        }
    }

    pub fn is_removable(&self, now: f64) -> bool {
        match self.phase {
            OrbPhase::Active => false,
            OrbPhase::Dying { since } => now - since >= ORB_FADE_OUT_MS,
        }
    }

    /// Share of the quota absorbed so far, in [0, 1] unless overshot.
    pub fn absorption_progress(&self) -> f32 {
        if self.required_particles == 0 {
            return 1.0;
        }
        self.absorbed_particles as f32 / self.required_particles as f32
    }
}
