pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod gravity;
pub mod integrator;
pub mod interaction;
pub mod math;
pub mod orb;
pub mod particle;
pub mod runtime;
pub mod simulation;
pub mod views;

pub use color::{color_by_lifespan, Rgb};
pub use config::SimConfig;
pub use engine::{Canvas, World};
pub use error::SimError;
pub use interaction::{apply_pointer_event, InteractionOutcome, PointerEvent};
pub use orb::{Orb, OrbId, OrbPhase};
pub use particle::{HistoryEntry, Lifecycle, Particle, ParticleOutcome};
pub use runtime::{
    apply_pointer, build_simulation_context, get_frame_view, get_orb_views, get_particle_views,
    get_pointer_field, run_headless, step_simulation, RunOptions, RunSummary, ScriptedEvent,
    SimulationContext,
};
pub use simulation::{step_world, StepReport};
pub use views::{FrameView, OrbView, ParticleView, PointerFieldView, Ring, TrailPoint};
