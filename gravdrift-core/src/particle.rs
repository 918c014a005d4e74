//! Drifting particles: edge spawning, gravity response, lifespan decay and trails.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::config::{
    BASE_DECAY_INTERVAL, FADE_TRAIL_LENGTH, MAX_LIFESPAN, MAX_SPAWN_SPEED, MAX_SPEED,
    MIN_SPAWN_SPEED, OFF_CANVAS_MARGIN, PARTICLE_FADE_OUT_MS, POINTER_GRAVITY,
};
use crate::engine::Canvas;
use crate::gravity::attraction;
use crate::integrator::integrate;
use crate::math::fade;
use crate::orb::{Orb, OrbId};

/// A past position and the lifespan the particle had when it was there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryEntry {
    pub pos: Vec2,
    pub lifespan: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lifecycle {
    Alive,
    Dying { since: f64 },
}

/// What happened to a particle during one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleOutcome {
    /// Moved (or kept fading) without touching an orb.
    Moved,
    /// Captured by the named orb; the particle is now dying.
    Absorbed(OrbId),
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    pub lifespan: u32,
    pub decay_interval: f32,
    pub last_decay: f64,
    pub history: Vec<HistoryEntry>,
    pub lifecycle: Lifecycle,
    pub death_alpha: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, now: f64) -> Self {
        Self {
            pos,
            vel,
            acc: Vec2::ZERO,
            lifespan: MAX_LIFESPAN,
            decay_interval: BASE_DECAY_INTERVAL,
            last_decay: now,
            history: Vec::new(),
            lifecycle: Lifecycle::Alive,
            death_alpha: 1.0,
        }
    }

    /// Spawns on a uniformly chosen canvas edge with a random heading and a
    /// speed in `[MIN_SPAWN_SPEED, MAX_SPAWN_SPEED]`.
    pub fn spawn_at_edge<R: Rng + ?Sized>(rng: &mut R, canvas: &Canvas, now: f64) -> Self {
        let (w, h) = (canvas.width(), canvas.height());
        let pos = match rng.gen_range(0..4) {
            0 => Vec2::new(rng.gen_range(0.0..w), 0.0),
            1 => Vec2::new(w, rng.gen_range(0.0..h)),
            2 => Vec2::new(rng.gen_range(0.0..w), h),
            _ => Vec2::new(0.0, rng.gen_range(0.0..h)),
        };

        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(MIN_SPAWN_SPEED..=MAX_SPAWN_SPEED);
        Self::new(pos, Vec2::from_angle(angle) * speed, now)
    }

    pub fn apply_force(&mut self, force: Vec2) {
        self.acc += force;
    }

    pub fn is_dying(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Dying { .. })
    }

    /// Latched: a second call keeps the original death timestamp.
    pub fn start_death(&mut self, now: f64) {
        if !self.is_dying() {
            self.lifecycle = Lifecycle::Dying { since: now };
        }
    }

    /// Advances the particle by one frame.
    ///
    /// Absorption is checked before any force is applied, so a captured
    /// particle does not move on the frame it is absorbed. The caller is
    /// responsible for crediting the orb named in the outcome.
    pub fn step(&mut self, gravity_source: Option<Vec2>, orbs: &[Orb], now: f64) -> ParticleOutcome {
        if let Lifecycle::Dying { since } = self.lifecycle {
            self.death_alpha = fade(now - since, PARTICLE_FADE_OUT_MS, 1.0, 0.0);
            return ParticleOutcome::Moved;
        }

        if let Some(orb) = orbs.iter().find(|orb| orb.is_in_range(self.pos, now)) {
            self.start_death(now);
            return ParticleOutcome::Absorbed(orb.id);
        }

        // Each source overwrites decay_interval rather than adding to it, so
        // only the last source iterated (the final live orb, else the pointer)
        // sets the slowdown. With no sources the previous value is kept.
        let sources = gravity_source
            .map(|pos| (pos, POINTER_GRAVITY))
            .into_iter()
            .chain(
                orbs.iter()
                    .filter(|orb| !orb.is_dying())
                    .map(|orb| (orb.pos, orb.gravity_strength)),
            );
        for (source, strength) in sources {
            let pull = attraction(self.pos, source, strength);
            self.decay_interval = BASE_DECAY_INTERVAL + pull.strength * 100.0 * 5.0;
            self.apply_force(pull.force);
        }

        integrate(&mut self.pos, &mut self.vel, &mut self.acc, MAX_SPEED);

        self.history.push(HistoryEntry {
            pos: self.pos,
            lifespan: self.lifespan,
        });

        // Pruned against the lifespan before this frame's decay, so a retained
        // entry may sit one above `lifespan + FADE_TRAIL_LENGTH` afterwards.
        let ceiling = self.lifespan + FADE_TRAIL_LENGTH;
        self.history.retain(|entry| entry.lifespan <= ceiling);

        if now - self.last_decay >= self.decay_interval as f64 {
            self.lifespan = self.lifespan.saturating_sub(1);
            self.last_decay = now;
        }

        if self.lifespan == 0 {
            self.start_death(now);
        }

        ParticleOutcome::Moved
    }

    pub fn is_removable(&self, canvas: &Canvas, now: f64) -> bool {
        match self.lifecycle {
            Lifecycle::Dying { since } => now - since >= PARTICLE_FADE_OUT_MS,
            Lifecycle::Alive => !canvas.contains_with_margin(self.pos, OFF_CANVAS_MARGIN),
        }
    }
}
