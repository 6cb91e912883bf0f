use anyhow::{Result, ensure};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use common::{constants::*, map::Field, protocol::Position};

const LOG_FILTER: &str = "info";

// ============================================================================
// Game Configuration
// ============================================================================

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub field: Field,
    pub initial_pursuers: usize,
    pub pursuer_capacity: usize,
    pub pursuer_tick: Duration,
    pub spawn_interval: Duration,
    pub reset_delay: Duration,
    pub player_start: Position,
    // Fixed seed for every random source; None draws fresh OS entropy per session
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field: Field::default(),
            initial_pursuers: INITIAL_PURSUERS,
            pursuer_capacity: PURSUER_CAPACITY,
            pursuer_tick: PURSUER_TICK,
            spawn_interval: SPAWN_INTERVAL,
            reset_delay: RESET_DELAY,
            player_start: Position::new(PLAYER_START_X, PLAYER_START_Y),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.field.width > 0 && self.field.height > 0,
            "field must have a positive size, got {}x{}",
            self.field.width,
            self.field.height
        );
        ensure!(self.field.margin >= 0, "spawn margin must not be negative");
        ensure!(
            self.pursuer_capacity <= PURSUER_CAPACITY,
            "pursuer capacity {} exceeds the {PURSUER_CAPACITY} reserved identifiers",
            self.pursuer_capacity
        );
        ensure!(
            self.initial_pursuers <= self.pursuer_capacity,
            "initial batch of {} exceeds capacity {}",
            self.initial_pursuers,
            self.pursuer_capacity
        );
        ensure!(!self.pursuer_tick.is_zero(), "pursuer tick must be non-zero");
        ensure!(!self.spawn_interval.is_zero(), "spawn interval must be non-zero");
        Ok(())
    }
}

// ============================================================================
// Logging
// ============================================================================

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
