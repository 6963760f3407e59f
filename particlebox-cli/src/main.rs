use clap::{Args, Parser, Subcommand};
use particlebox_core::{NullSink, Simulation, SimulationConfig};
use std::fs;
use std::path::{Path, PathBuf};

mod viewer;

#[derive(Parser)]
#[command(name = "particlebox")]
#[command(about = "Particle sandbox: gravity, a box, a sphere and a capsule", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation headless and print a summary
    Run {
        #[command(flatten)]
        settings: Settings,

        /// Number of frames to simulate
        #[arg(long, default_value_t = 600)]
        frames: u32,

        /// External frame rate the frame delta is derived from
        #[arg(long, default_value_t = 60.0)]
        fps: f32,
    },
    /// Open the interactive viewer
    View {
        #[command(flatten)]
        settings: Settings,
    },
}

/// Config file plus command-line overrides
#[derive(Args, Clone)]
struct Settings {
    /// JSON config file; missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    particles: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    gravity: Option<f32>,

    #[arg(long)]
    elasticity: Option<f32>,

    #[arg(long)]
    friction: Option<f32>,

    #[arg(long)]
    time_factor: Option<f32>,
}

impl Settings {
    fn load(&self) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => SimulationConfig::default(),
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply(&self, config: &mut SimulationConfig) {
        if let Some(n) = self.particles {
            config.particle_count = n;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(g) = self.gravity {
            config.gravity_magnitude = g;
        }
        if let Some(e) = self.elasticity {
            config.bounce_elasticity = e;
        }
        if let Some(f) = self.friction {
            config.friction_factor = f;
        }
        if let Some(t) = self.time_factor {
            config.time_factor = t;
        }
    }
}

pub(crate) fn read_config(path: &Path) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    let source = fs::read_to_string(path)?;
    let config = serde_json::from_str(&source)?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            settings,
            frames,
            fps,
        } => run_headless(&settings, frames, fps),
        Commands::View { settings } => run_viewer(&settings),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    use simplelog::LevelFilter::{Debug, Info, Off};
    let level = if verbose { Debug } else { Info };
    // A second logger can only fail to install; nothing to recover.
    let _ = simplelog::TermLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
}

fn run_headless(
    settings: &Settings,
    frames: u32,
    fps: f32,
) -> Result<(), Box<dyn std::error::Error>> {
    if !(fps.is_finite() && fps > 0.0) {
        return Err(format!("fps must be positive, got {fps}").into());
    }
    let config = settings.load()?;
    let frame_dt = 1.0 / fps;

    let mut sim = Simulation::init(config, &mut NullSink)?;
    for _ in 0..frames {
        sim.update(frame_dt, &mut NullSink);
    }

    print_summary(&sim);
    sim.teardown();
    Ok(())
}

fn print_summary(sim: &Simulation) {
    let positions = sim.particles().positions();
    let count = positions.len() as f32;
    let (min_y, max_y) = positions
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.y), hi.max(p.y))
        });
    let mean_y = positions.iter().map(|p| p.y).sum::<f32>() / count;
    let mean_speed = sim
        .particles()
        .velocities()
        .iter()
        .map(|v| v.length())
        .sum::<f32>()
        / count;

    println!("frames = {}", sim.frame());
    println!("sim_time = {:.4}", sim.sim_time());
    println!("particles = {}", positions.len());
    println!("height: min = {:.4} mean = {:.4} max = {:.4}", min_y, mean_y, max_y);
    println!("mean_speed = {:.4}", mean_speed);
}

fn run_viewer(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let config = settings.load()?;
    let config_path = settings.config.clone();
    let overrides = settings.clone();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "particlebox",
        options,
        Box::new(move |cc| {
            let app: Box<dyn eframe::App> = Box::new(viewer::ViewerApp::new(
                config,
                config_path,
                Box::new(move |c: &mut SimulationConfig| overrides.apply(c)),
                cc,
            ));
            Ok(app)
        }),
    )?;
    Ok(())
}
