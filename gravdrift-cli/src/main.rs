mod canvas_app;

use clap::{Parser, Subcommand};
use glam::Vec2;
use gravdrift_core::{run_headless, Canvas, PointerEvent, RunOptions, ScriptedEvent, SimConfig};

use crate::canvas_app::CanvasApp;

#[derive(Parser)]
#[command(name = "gravdrift")]
#[command(about = "gravdrift - particles drifting into pointer-made orbs", long_about = None)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation without a window and print a summary
    Run {
        #[arg(long, default_value_t = 1000)]
        frames: u64,
        /// Milliseconds per frame
        #[arg(long, default_value_t = 16.0)]
        frame_ms: f64,
        #[arg(long, default_value_t = 800.0)]
        width: f32,
        #[arg(long, default_value_t = 600.0)]
        height: f32,
        #[arg(long)]
        seed: Option<u64>,
        /// Disable edge spawning
        #[arg(long)]
        no_spawn: bool,
        /// Hold the pointer at "x,y" for the whole run, releasing on the last frame
        #[arg(long, value_parser = parse_point)]
        hold: Option<Vec2>,
    },
    /// Open the interactive window
    Play {
        #[arg(long, default_value_t = 1024.0)]
        width: f32,
        #[arg(long, default_value_t = 768.0)]
        height: f32,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got \"{}\"", s))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x in \"{}\": {}", s, e))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y in \"{}\": {}", s, e))?;
    Ok(Vec2::new(x, y))
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Run {
            frames,
            frame_ms,
            width,
            height,
            seed,
            no_spawn,
            hold,
        } => run(frames, frame_ms, width, height, seed, no_spawn, hold),
        Commands::Play {
            width,
            height,
            seed,
        } => play(width, height, seed),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn sim_config(width: f32, height: f32, seed: Option<u64>) -> Result<SimConfig, Box<dyn std::error::Error>> {
    let mut config = SimConfig::new(Canvas::new(width, height)?);
    config.seed = seed;
    Ok(config)
}

fn run(
    frames: u64,
    frame_ms: f64,
    width: f32,
    height: f32,
    seed: Option<u64>,
    no_spawn: bool,
    hold: Option<Vec2>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = RunOptions {
        config: sim_config(width, height, seed)?.with_spawning(!no_spawn),
        frame_ms,
        max_frames: frames,
    };
    let script: Vec<ScriptedEvent> = hold
        .map(|point| {
            vec![
                ScriptedEvent { frame: 0, event: PointerEvent::Press(point) },
                ScriptedEvent { frame: frames, event: PointerEvent::Release(point) },
            ]
        })
        .unwrap_or_default();

    let summary = run_headless(&options, &script)?;

    println!("frames = {}", summary.frames);
    println!("live_particles = {}", summary.live_particles);
    println!("live_orbs = {}", summary.live_orbs);
    println!("orbs_spawned = {}", summary.orbs_spawned);
    println!("particles_absorbed = {}", summary.particles_absorbed);

    Ok(())
}

fn play(width: f32, height: f32, seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let config = sim_config(width, height, seed)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("gravdrift")
            .with_inner_size([width, height]),
        ..Default::default()
    };

    eframe::run_native(
        "gravdrift",
        options,
        Box::new(move |cc| Ok(Box::new(CanvasApp::new(config, cc)))),
    )?;

    Ok(())
}
