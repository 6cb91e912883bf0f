use rand::rngs::StdRng;
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::{
    presentation::Presentation,
    reset::ResetListener,
    session::{SharedPlayer, lock_pursuer},
};
use common::{protocol::sprite_bounds, pursuers::Pursuer};

// ============================================================================
// Pursuer Behavior Task
// ============================================================================

pub struct PursuerTask {
    pub pursuer: Arc<Mutex<Pursuer>>,
    pub player: SharedPlayer,
    pub presentation: Arc<dyn Presentation>,
    pub reset: ResetListener,
    pub rng: StdRng,
    pub period: Duration,
}

// One task per pursuer: advance its phase machine every `period` until the session is
// reset. Cancellation wins over a tick that is ready at the same time.
pub async fn pursuer_task(task: PursuerTask) {
    let PursuerTask {
        pursuer,
        player,
        presentation,
        mut reset,
        mut rng,
        period,
    } = task;

    let id = lock_pursuer(&pursuer).id;
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;

            () = reset.cancelled() => {
                debug!(?id, generation = reset.generation(), "pursuer cancelled");
                return;
            }

            _ = interval.tick() => {
                // Copy the target out so the player lock is never held with ours
                let target = player.read().as_target();
                let (pos, phase) = {
                    let mut pursuer = lock_pursuer(&pursuer);
                    pursuer.advance(target, &mut rng);
                    (pursuer.pos, pursuer.phase())
                };
                trace!(?id, x = pos.x, y = pos.y, ?phase, "pursuer moved");
                presentation.set_entity_bounds(id, sprite_bounds(pos));
            }
        }
    }
}
