use rand::{SeedableRng, rngs::StdRng};
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::{
    config::GameConfig,
    presentation::{Presentation, Visual},
    reset::{ResetListener, ResetSignal},
    systems::{PursuerTask, pursuer_task, spawner_task},
};
use common::{
    constants::{GREETING_TEXT, PURSUER_CEL, PURSUER_ID_BASE},
    players::Player,
    protocol::{EntityId, Position, sprite_bounds},
    pursuers::Pursuer,
    spawning::random_spawn_point,
};

// ============================================================================
// Shared State
// ============================================================================

// The player, written by the frame loop and read by every pursuer task
#[derive(Debug, Clone)]
pub struct SharedPlayer(Arc<RwLock<Player>>);

impl SharedPlayer {
    #[must_use]
    pub fn new(player: Player) -> Self {
        Self(Arc::new(RwLock::new(player)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Player> {
        self.0.read().expect("player lock poisoned")
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Player> {
        self.0.write().expect("player lock poisoned")
    }

    #[must_use]
    pub fn snapshot(&self) -> Player {
        self.read().clone()
    }
}

// One live pursuer: its state, written only by its own task, and that task
#[derive(Debug)]
pub struct PursuerSlot {
    pub id: EntityId,
    pub pursuer: Arc<Mutex<Pursuer>>,
    pub task: JoinHandle<()>,
}

// Live pursuers in spawn order. Only ever appended to; replaced wholesale on reset.
#[derive(Debug, Clone, Default)]
pub struct PursuerRoster(Arc<Mutex<Vec<PursuerSlot>>>);

impl PursuerRoster {
    fn lock(&self) -> MutexGuard<'_, Vec<PursuerSlot>> {
        self.0.lock().expect("pursuer roster lock poisoned")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[must_use]
    pub fn positions(&self) -> Vec<(EntityId, Position)> {
        self.lock()
            .iter()
            .map(|slot| {
                let pursuer = lock_pursuer(&slot.pursuer);
                (pursuer.id, pursuer.pos)
            })
            .collect()
    }

    #[must_use]
    pub fn snapshots(&self) -> Vec<Pursuer> {
        self.lock().iter().map(|slot| lock_pursuer(&slot.pursuer).clone()).collect()
    }

    // Overwrite one pursuer's position; false if `index` is not live
    pub fn place(&self, index: usize, pos: Position) -> bool {
        self.lock().get(index).is_some_and(|slot| {
            lock_pursuer(&slot.pursuer).pos = pos;
            true
        })
    }

    fn take_slots(&self) -> Vec<PursuerSlot> {
        std::mem::take(&mut *self.lock())
    }
}

pub fn lock_pursuer(pursuer: &Mutex<Pursuer>) -> MutexGuard<'_, Pursuer> {
    pursuer.lock().expect("pursuer lock poisoned")
}

// ============================================================================
// Random Sources
// ============================================================================

const STREAM_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

// Independent generator per stream. With a seed every stream is reproducible.
#[must_use]
pub fn stream_rng(seed: Option<u64>, stream: u64) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, |seed| {
        StdRng::seed_from_u64(seed ^ stream.wrapping_add(1).wrapping_mul(STREAM_MIX))
    })
}

// ============================================================================
// Spawning
// ============================================================================

// Everything needed to bring a new pursuer to life in the current session
#[derive(Clone)]
pub struct SpawnContext {
    pub config: Arc<GameConfig>,
    pub presentation: Arc<dyn Presentation>,
    pub player: SharedPlayer,
    pub roster: PursuerRoster,
    pub signal: ResetSignal,
    pub generation: u64,
}

impl SpawnContext {
    // Spawn one pursuer on a random border and start its behavior task. Returns None when
    // the roster is at capacity.
    pub fn spawn_pursuer(&self, rng: &mut StdRng) -> Option<EntityId> {
        let (id, pos) = {
            let mut slots = self.roster.lock();
            if slots.len() >= self.config.pursuer_capacity {
                return None;
            }

            let id = EntityId(PURSUER_ID_BASE + slots.len() as u32);
            let (side, pos) = random_spawn_point(&self.config.field, rng);

            // The task's first tick is one period away, so it cannot race the calls below
            let pursuer = Arc::new(Mutex::new(Pursuer::new(id, pos)));
            let task = tokio::spawn(pursuer_task(PursuerTask {
                pursuer: Arc::clone(&pursuer),
                player: self.player.clone(),
                presentation: Arc::clone(&self.presentation),
                reset: self.listener(),
                rng: stream_rng(self.config.seed, pursuer_stream(self.generation, id)),
                period: self.config.pursuer_tick,
            }));
            slots.push(PursuerSlot { id, pursuer, task });

            debug!(?id, ?side, x = pos.x, y = pos.y, "pursuer spawned");
            (id, pos)
        };

        self.presentation.show_entity(id, Visual::Glyphs);
        self.presentation.set_entity_bounds(id, sprite_bounds(pos));
        self.presentation.set_entity_viewport_offset(id, PURSUER_CEL.into());
        Some(id)
    }

    // Listener bound to this session's generation, so tasks created after a reset was
    // broadcast still see it
    #[must_use]
    pub fn listener(&self) -> ResetListener {
        self.signal.listener(self.generation)
    }
}

const fn pursuer_stream(generation: u64, id: EntityId) -> u64 {
    (generation << 32) | id.0 as u64
}

const fn spawner_stream(generation: u64) -> u64 {
    (generation << 32) | u32::MAX as u64
}

// ============================================================================
// Session
// ============================================================================

/// Live state of one play-through: the player, the pursuers and the tasks driving them.
pub struct Session {
    pub generation: u64,
    pub player: SharedPlayer,
    pub roster: PursuerRoster,
    spawner: Option<JoinHandle<()>>,
    reset_timer: Option<JoinHandle<()>>,
}

impl Session {
    // Must run inside a tokio runtime
    #[must_use]
    pub fn start(config: &Arc<GameConfig>, presentation: &Arc<dyn Presentation>, signal: &ResetSignal) -> Self {
        let generation = signal.generation();
        let player = SharedPlayer::new(Player::new(config.player_start));

        {
            let player = player.read();
            presentation.show_entity(player.id, Visual::Glyphs);
            presentation.set_entity_bounds(player.id, sprite_bounds(player.pos));
            presentation.set_entity_viewport_offset(player.id, player.cel().into());
        }

        let ctx = SpawnContext {
            config: Arc::clone(config),
            presentation: Arc::clone(presentation),
            player: player.clone(),
            roster: PursuerRoster::default(),
            signal: signal.clone(),
            generation,
        };

        let mut rng = stream_rng(config.seed, spawner_stream(generation));
        for _ in 0..config.initial_pursuers {
            ctx.spawn_pursuer(&mut rng);
        }

        presentation.emit_notification(GREETING_TEXT);

        let roster = ctx.roster.clone();
        let reset = ctx.listener();
        let spawner = tokio::spawn(spawner_task(ctx, rng, reset));

        info!(generation, pursuers = roster.len(), "session started");
        Self {
            generation,
            player,
            roster,
            spawner: Some(spawner),
            reset_timer: None,
        }
    }

    #[must_use]
    pub const fn reset_armed(&self) -> bool {
        self.reset_timer.is_some()
    }

    pub fn arm_reset(&mut self, timer: JoinHandle<()>) {
        if let Some(previous) = self.reset_timer.replace(timer) {
            previous.abort();
        }
    }

    // Join every task of this session and return how many of them panicked. Callers
    // cancel the session's generation first; the spawner is joined before the pursuers so
    // nothing is appended while draining.
    pub async fn stop(&mut self) -> usize {
        let mut failed = 0;

        if let Some(spawner) = self.spawner.take() {
            match spawner.await {
                Ok(()) => {}
                Err(e) => {
                    warn!(generation = self.generation, "spawner task failed: {e}");
                    failed += 1;
                }
            }
        }

        let slots = self.roster.take_slots();
        let count = slots.len();
        for slot in slots {
            match slot.task.await {
                Ok(()) => {}
                Err(e) => {
                    warn!(id = ?slot.id, generation = self.generation, "pursuer task failed: {e}");
                    failed += 1;
                }
            }
        }

        if let Some(timer) = self.reset_timer.take() {
            timer.abort();
        }

        debug!(generation = self.generation, pursuers = count, failed, "session stopped");
        failed
    }
}
