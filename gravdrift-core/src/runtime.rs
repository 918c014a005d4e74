use crate::config::SimConfig;
use crate::engine::World;
use crate::error::SimError;
use crate::interaction::{apply_pointer_event, InteractionOutcome, PointerEvent};
use crate::simulation::step_world;
use crate::views::{frame_view, FrameView, OrbView, ParticleView, PointerFieldView};

/// A world driven by a fixed-step frame clock.
#[derive(Debug)]
pub struct SimulationContext {
    pub world: World,
    /// Time of the most recent frame, in milliseconds.
    pub clock_ms: f64,
    pub frame_ms: f64,
    pub current_frame: u64,
    pub max_frames: u64,
    pub orbs_spawned: usize,
    pub particles_absorbed: usize,
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config: SimConfig,
    pub frame_ms: f64,
    pub max_frames: u64,
}

/// A pointer event delivered before the given frame is stepped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptedEvent {
    pub frame: u64,
    pub event: PointerEvent,
}

/// Final tallies of a headless run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub live_particles: usize,
    pub live_orbs: usize,
    pub orbs_spawned: usize,
    pub particles_absorbed: usize,
}

pub fn build_simulation_context(options: &RunOptions) -> Result<SimulationContext, SimError> {
    if !(options.frame_ms.is_finite() && options.frame_ms > 0.0) {
        return Err(SimError::InvalidFrameDuration(options.frame_ms));
    }
    Ok(SimulationContext {
        world: World::new(&options.config),
        clock_ms: 0.0,
        frame_ms: options.frame_ms,
        current_frame: 0,
        max_frames: options.max_frames,
        orbs_spawned: 0,
        particles_absorbed: 0,
    })
}

/// Advances one frame. Returns true once `max_frames` have run.
pub fn step_simulation(ctx: &mut SimulationContext) -> bool {
    if ctx.current_frame >= ctx.max_frames {
        return true;
    }
    ctx.clock_ms += ctx.frame_ms;
    let report = step_world(&mut ctx.world, ctx.clock_ms);
    ctx.particles_absorbed += report.absorbed;
    ctx.current_frame += 1;
    ctx.current_frame >= ctx.max_frames
}

/// Applies a pointer event at the context's current time.
pub fn apply_pointer(ctx: &mut SimulationContext, event: PointerEvent) -> InteractionOutcome {
    let outcome = apply_pointer_event(&mut ctx.world, event, ctx.clock_ms);
    if outcome.spawned_orb.is_some() {
        ctx.orbs_spawned += 1;
    }
    outcome
}

/// Runs every frame of `options`, delivering `script` events on their frames.
pub fn run_headless(options: &RunOptions, script: &[ScriptedEvent]) -> Result<RunSummary, SimError> {
    if let Some(late) = script.iter().find(|s| s.frame > options.max_frames) {
        return Err(SimError::ScriptOutOfRange {
            frame: late.frame,
            max_frames: options.max_frames,
        });
    }

    let mut ctx = build_simulation_context(options)?;
    let mut pending: Vec<ScriptedEvent> = script.to_vec();
    pending.sort_by_key(|s| s.frame);
    let mut pending = pending.into_iter().peekable();

    loop {
        while let Some(scripted) = pending.next_if(|s| s.frame == ctx.current_frame) {
            apply_pointer(&mut ctx, scripted.event);
        }
        if step_simulation(&mut ctx) {
            break;
        }
    }
    // Events scheduled exactly at the end land after the last frame.
    for scripted in pending {
        apply_pointer(&mut ctx, scripted.event);
    }

    let summary = summarize(&ctx);
    tracing::info!(
        frames = summary.frames,
        particles = summary.live_particles,
        orbs = summary.live_orbs,
        spawned = summary.orbs_spawned,
        absorbed = summary.particles_absorbed,
        "run finished"
    );
    Ok(summary)
}

pub fn summarize(ctx: &SimulationContext) -> RunSummary {
    RunSummary {
        frames: ctx.current_frame,
        live_particles: ctx.world.particles.len(),
        live_orbs: ctx.world.orbs.len(),
        orbs_spawned: ctx.orbs_spawned,
        particles_absorbed: ctx.particles_absorbed,
    }
}

pub fn get_frame_view(ctx: &SimulationContext) -> FrameView {
    frame_view(&ctx.world)
}

pub fn get_particle_views(ctx: &SimulationContext) -> Vec<ParticleView> {
    ctx.world.particles.iter().map(ParticleView::from_particle).collect()
}

pub fn get_orb_views(ctx: &SimulationContext) -> Vec<OrbView> {
    ctx.world.orbs.iter().map(OrbView::from_orb).collect()
}

pub fn get_pointer_field(ctx: &SimulationContext) -> Option<PointerFieldView> {
    ctx.world.gravity_source.map(PointerFieldView::at)
}
