//! Simulator entry point.
//!
//! # Examples
//!
//! ```bash
//! # Behavior tree for one simulated minute
//! cargo run -p roomba-sim -- --engine bt --ticks 6000
//!
//! # State machine, reproducible, with a tuning file
//! cargo run -p roomba-sim -- --engine fsm --seed 7 --config roomba.toml
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use roomba::{AngleSource, Engine, ManeuverKit, RandomAngles, RobotConfig};
use roomba_sim::{Room, SimulatedRoomba, run};

#[derive(Parser, Debug)]
#[command(name = "roomba-sim", version, about = "Drive the cleaning robot in a simulated room")]
struct Args {
    /// Decision engine: `bt` or `fsm`
    #[arg(long, default_value = "bt")]
    engine: Engine,

    /// Number of sample periods to simulate
    #[arg(long, default_value_t = 6_000)]
    ticks: u64,

    /// TOML file with robot tuning; `ROOMBA_*` variables override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for rotation targets; unseeded when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Room width in metres
    #[arg(long, default_value_t = 5.0)]
    width: f64,

    /// Room height in metres
    #[arg(long, default_value_t = 5.0)]
    height: f64,

    /// Robot body radius in metres
    #[arg(long, default_value_t = 0.17)]
    radius: f64,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RobotConfig::load(path)
            .with_context(|| format!("loading robot config from {}", path.display()))?
            .with_env_overrides(),
        None => RobotConfig::from_env(),
    };
    config.validate().context("robot config after environment overrides")?;

    ensure!(args.radius > 0.0, "robot radius must be positive");
    ensure!(
        args.width > 2.0 * args.radius && args.height > 2.0 * args.radius,
        "room {}x{} is too small for a robot of radius {}",
        args.width,
        args.height,
        args.radius
    );

    let angles: Arc<dyn AngleSource> = match args.seed {
        Some(seed) => Arc::new(RandomAngles::seeded(seed)),
        None => Arc::new(RandomAngles::from_entropy()),
    };
    let kit = ManeuverKit::new(config, angles)?;

    tracing::info!(engine = %args.engine, ticks = args.ticks, "starting simulation");
    tracing::debug!(?config, "robot config");

    let mut controller = args.engine.build::<SimulatedRoomba>(&kit);
    let room = Room {
        width: args.width,
        height: args.height,
    };
    let mut robot = SimulatedRoomba::new(room, args.radius);

    let report = run(controller.as_mut(), &mut robot, args.ticks, config.sample_time);

    tracing::info!(
        bumps = report.bumps,
        distance = %format!("{:.2}", report.distance),
        x = %format!("{:.2}", report.final_pose.x),
        y = %format!("{:.2}", report.final_pose.y),
        "simulation finished"
    );
    for (maneuver, seconds) in &report.time_by_maneuver {
        tracing::info!(
            maneuver = %maneuver,
            seconds = %format!("{seconds:.2}"),
            "time in maneuver"
        );
    }

    Ok(())
}
