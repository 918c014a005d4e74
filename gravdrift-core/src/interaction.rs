//! Pointer handling: a held pointer is a gravity source, and releasing it over
//! a dense enough cluster condenses that cluster into an orb.

use glam::Vec2;

use crate::config::{RELEASE_RADIUS, RELEASE_THRESHOLD};
use crate::engine::World;
use crate::orb::OrbId;

/// Pointer input in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(Vec2),
    Drag(Vec2),
    Release(Vec2),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionOutcome {
    /// Orb condensed by a release, if any.
    pub spawned_orb: Option<OrbId>,
    /// Particles consumed by that orb's formation.
    pub consumed: usize,
}

pub fn apply_pointer_event(world: &mut World, event: PointerEvent, now: f64) -> InteractionOutcome {
    match event {
        PointerEvent::Press(pos) | PointerEvent::Drag(pos) => {
            world.gravity_source = Some(pos);
            InteractionOutcome::default()
        }
        PointerEvent::Release(pos) => {
            let outcome = release(world, pos, now);
            world.gravity_source = None;
            outcome
        }
    }
}

/// Spawns an orb at `pos` when at least `RELEASE_THRESHOLD` particles sit
/// within `RELEASE_RADIUS` of it. Those particles are removed outright, without
/// the fade that absorption gives them.
fn release(world: &mut World, pos: Vec2, now: f64) -> InteractionOutcome {
    let nearby = world
        .particles
        .iter()
        .filter(|p| p.pos.distance(pos) < RELEASE_RADIUS)
        .count();

    if nearby < RELEASE_THRESHOLD {
        tracing::debug!(nearby, "release too sparse for an orb");
        return InteractionOutcome::default();
    }

    world.particles.retain(|p| p.pos.distance(pos) >= RELEASE_RADIUS);
    let id = world.spawn_orb(pos, nearby, now);

    InteractionOutcome {
        spawned_orb: Some(id),
        consumed: nearby,
    }
}
