use rand::Rng;

use crate::config::{MAX_PARTICLES, SPAWN_PROBABILITY};
use crate::engine::World;
use crate::particle::{Particle, ParticleOutcome};

/// Counts of what one frame did, for logging and run summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub spawned: usize,
    pub absorbed: usize,
    pub particles_removed: usize,
    pub orbs_removed: usize,
}

/// Runs one frame at time `now` (milliseconds).
///
/// Orbs are advanced before particles so an orb that met its quota on an
/// earlier frame is already out of range and out of the gravity sum.
pub fn step_world(world: &mut World, now: f64) -> StepReport {
    let mut report = StepReport::default();

    for orb in world.orbs.iter_mut().rev() {
        orb.step(now);
    }
    let orbs_before = world.orbs.len();
    world.orbs.retain(|orb| {
        let dead = orb.is_removable(now);
        if dead {
            tracing::info!(orb = orb.id.0, absorbed = orb.absorbed_particles, "orb removed");
        }
        !dead
    });
    report.orbs_removed = orbs_before - world.orbs.len();

    if world.spawning
        && world.particles.len() < MAX_PARTICLES
        && world.rng.gen_bool(SPAWN_PROBABILITY)
    {
        let particle = Particle::spawn_at_edge(&mut world.rng, &world.canvas, now);
        world.particles.push(particle);
        report.spawned = 1;
    }

    // Back to front: when an orb fills its quota mid-frame, the newest
    // particles are the ones it takes.
    for particle in world.particles.iter_mut().rev() {
        let outcome = particle.step(world.gravity_source, &world.orbs, now);
        if let ParticleOutcome::Absorbed(id) = outcome {
            // Credit immediately so later particles this frame see the new count.
            if let Some(orb) = world.orbs.iter_mut().find(|orb| orb.id == id) {
                orb.absorb(now);
                if orb.is_dying() {
                    tracing::debug!(orb = id.0, "orb quota reached");
                }
            }
            report.absorbed += 1;
        }
    }

    let canvas = world.canvas;
    let particles_before = world.particles.len();
    world.particles.retain(|p| !p.is_removable(&canvas, now));
    report.particles_removed = particles_before - world.particles.len();

    tracing::trace!(
        particles = world.particles.len(),
        orbs = world.orbs.len(),
        absorbed = report.absorbed,
        removed = report.particles_removed,
        "frame stepped"
    );

    report
}
