use anyhow::{Context, Result};
use bevy_math::IRect;
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::info;

use crate::{
    config::GameConfig,
    presentation::{DirectionInput, Presentation, Visual},
    reset::{ResetSignal, after_delay},
    session::Session,
    systems::{Backdrop, player_collision_system, player_controller_system},
};
use common::{
    constants::{DEATH_TEXT, GLYPH_HEIGHT, NOTIFICATION_ID},
    players::Player,
    protocol::{EntityId, Position},
    pursuers::Pursuer,
};

// What happened on a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    Running,
    PlayerCaught(EntityId),
    SessionReset { generation: u64 },
}

// ============================================================================
// Game Session Coordinator
// ============================================================================

/// Owns the current [`Session`] and the reset signal shared by all of its tasks.
///
/// [`Game::update`] is the per-frame entry point. It must be driven from inside a tokio
/// runtime, since sessions spawn one task per pursuer plus the spawn scheduler.
pub struct Game {
    config: Arc<GameConfig>,
    presentation: Arc<dyn Presentation>,
    signal: ResetSignal,
    session: Session,
    backdrop: Backdrop,
    // Delayed resets report the generation they cancelled
    reset_tx: UnboundedSender<u64>,
    reset_rx: UnboundedReceiver<u64>,
    frame: u64,
}

impl Game {
    pub fn start(config: GameConfig, presentation: Arc<dyn Presentation>) -> Result<Self> {
        config.validate().context("invalid game configuration")?;
        let config = Arc::new(config);

        Backdrop::show(&config.field, presentation.as_ref());
        presentation.show_entity(EntityId(NOTIFICATION_ID), Visual::NotificationStrip);
        presentation.set_entity_bounds(
            EntityId(NOTIFICATION_ID),
            IRect::new(0, config.field.height / 2, config.field.width, config.field.height / 2 + GLYPH_HEIGHT),
        );

        let signal = ResetSignal::new();
        let session = Session::start(&config, &presentation, &signal);
        let (reset_tx, reset_rx) = unbounded_channel();

        Ok(Self {
            config,
            presentation,
            signal,
            session,
            backdrop: Backdrop::default(),
            reset_tx,
            reset_rx,
            frame: 0,
        })
    }

    // ========================================================================
    // Per-Frame Update
    // ========================================================================

    // Order within a frame: pending reset, backdrop, player movement, collision.
    pub async fn update(&mut self, input: &impl DirectionInput) -> FrameEvent {
        self.frame += 1;

        if self.take_reset_request() {
            self.reset().await;
            return FrameEvent::SessionReset {
                generation: self.session.generation,
            };
        }

        self.backdrop.update(self.presentation.as_ref());
        player_controller_system(&self.session.player, input, self.presentation.as_ref());

        match player_collision_system(&self.session.player, &self.session.roster) {
            Some(pursuer) => {
                self.presentation.emit_notification(DEATH_TEXT);
                self.arm_reset();
                FrameEvent::PlayerCaught(pursuer)
            }
            None => FrameEvent::Running,
        }
    }

    fn take_reset_request(&mut self) -> bool {
        let mut requested = false;
        while let Ok(generation) = self.reset_rx.try_recv() {
            requested |= generation == self.session.generation;
        }
        requested
    }

    // Broadcast the reset once the delay elapses, then ask the frame loop to rebuild
    fn arm_reset(&mut self) {
        let signal = self.signal.clone();
        let reset_tx = self.reset_tx.clone();
        let generation = self.session.generation;
        let timer = after_delay(self.config.reset_delay, move || {
            signal.cancel(generation);
            let _ = reset_tx.send(generation);
        });
        self.session.arm_reset(timer);
        info!(generation, delay = ?self.config.reset_delay, "reset armed");
    }

    // ========================================================================
    // Reset & Shutdown
    // ========================================================================

    // Stop every task of the current session, then rebuild from the startup state
    pub async fn reset(&mut self) {
        self.cancel();
        self.session.stop().await;
        self.session = Session::start(&self.config, &self.presentation, &self.signal);
    }

    // Broadcast cancellation to the current session without rebuilding it
    pub fn cancel(&self) {
        self.signal.cancel(self.session.generation);
    }

    pub async fn shutdown(mut self) {
        self.cancel();
        self.session.stop().await;
        info!(frames = self.frame, "game shut down");
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.session.generation
    }

    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    #[must_use]
    pub const fn reset_armed(&self) -> bool {
        self.session.reset_armed()
    }

    #[must_use]
    pub fn player(&self) -> Player {
        self.session.player.snapshot()
    }

    #[must_use]
    pub fn pursuer_count(&self) -> usize {
        self.session.roster.len()
    }

    #[must_use]
    pub fn pursuers(&self) -> Vec<Pursuer> {
        self.session.roster.snapshots()
    }

    #[must_use]
    pub fn pursuer_positions(&self) -> Vec<Position> {
        self.session.roster.positions().into_iter().map(|(_, pos)| pos).collect()
    }

    // Move a live pursuer, e.g. to stage a collision
    pub fn place_pursuer(&self, index: usize, pos: Position) -> bool {
        self.session.roster.place(index, pos)
    }
}

