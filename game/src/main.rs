use anyhow::{Context, Result, ensure};
use clap::Parser;
use std::sync::Arc;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tracing::{info, warn};

use game::{
    FrameEvent, Game, GameConfig,
    autopilot::flee_input,
    init_tracing,
    presentation::{KeyboardInput, LogPresentation},
};

// ============================================================================
// CLI Argument Parsing
// ============================================================================

#[derive(Parser)]
#[command(author, version, about = "Headless swarm survival runner", long_about = None)]
struct Args {
    /// Seed every random source for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of live pursuers
    #[arg(long, default_value_t = common::constants::PURSUER_CAPACITY)]
    capacity: usize,

    /// Pursuers spawned when a session starts
    #[arg(long, default_value_t = common::constants::INITIAL_PURSUERS)]
    initial: usize,

    /// Frames per second of the main update loop
    #[arg(long, default_value_t = 60)]
    fps: u64,

    /// Stop after this many seconds
    #[arg(long, default_value_t = 30)]
    duration_secs: u64,

    /// Let the player run away from the nearest pursuer instead of standing still
    #[arg(long, default_value_t = false)]
    autopilot: bool,
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    ensure!(args.fps > 0, "--fps must be positive");

    let config = GameConfig {
        initial_pursuers: args.initial,
        pursuer_capacity: args.capacity,
        seed: args.seed,
        ..GameConfig::default()
    };
    let mut game = Game::start(config, Arc::new(LogPresentation)).context("failed to start game")?;

    let frame_duration = Duration::from_nanos(1_000_000_000 / args.fps);
    let mut interval = time::interval(frame_duration);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let deadline = Instant::now() + Duration::from_secs(args.duration_secs);
    let mut deaths = 0u32;
    let mut resets = 0u32;

    info!(fps = args.fps, autopilot = args.autopilot, "starting frame loop");
    while Instant::now() < deadline {
        interval.tick().await;

        let input = if args.autopilot {
            flee_input(game.player().pos, &game.pursuer_positions(), &game.config().field)
        } else {
            KeyboardInput::default()
        };

        let update_start = Instant::now();
        match game.update(&input).await {
            FrameEvent::Running => {}
            FrameEvent::PlayerCaught(pursuer) => {
                deaths += 1;
                info!(?pursuer, frame = game.frame(), "player died");
            }
            FrameEvent::SessionReset { generation } => {
                resets += 1;
                info!(generation, "session rebuilt");
            }
        }
        let update_elapsed = update_start.elapsed();

        if update_elapsed > frame_duration {
            warn!(
                "frame {} took {:.2}ms (exceeded {:.2}ms budget)",
                game.frame(),
                update_elapsed.as_secs_f64() * 1000.0,
                frame_duration.as_secs_f64() * 1000.0
            );
        }
    }

    info!(
        deaths,
        resets,
        pursuers = game.pursuer_count(),
        alive = !game.player().is_dead(),
        "run finished"
    );
    game.shutdown().await;
    Ok(())
}
