use rand::rngs::StdRng;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::{reset::ResetListener, session::SpawnContext};

// ============================================================================
// Spawn Scheduler Task
// ============================================================================

// Add one pursuer per interval until capacity, then idle until the session is reset
pub async fn spawner_task(ctx: SpawnContext, mut rng: StdRng, mut reset: ResetListener) {
    let period = ctx.config.spawn_interval;
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            () = reset.cancelled() => {
                debug!(generation = reset.generation(), "spawner cancelled");
                return;
            }

            _ = interval.tick() => {
                if ctx.spawn_pursuer(&mut rng).is_none() {
                    trace!("pursuer capacity reached");
                }
            }
        }
    }
}
