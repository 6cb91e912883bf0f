use tracing::info;

use crate::session::{PursuerRoster, SharedPlayer};
use common::{collision::first_hit, protocol::EntityId};

// ============================================================================
// Player vs Pursuer Collision
// ============================================================================

// Returns the pursuer that killed the player on this frame. Once the player is dead this
// never reports anything again.
pub fn player_collision_system(player: &SharedPlayer, roster: &PursuerRoster) -> Option<EntityId> {
    if player.read().is_dead() {
        return None;
    }

    // Snapshot pursuers before taking the player lock
    let pursuers = roster.positions();

    let mut player = player.write();
    let hit = first_hit(player.pos, pursuers)?;
    if !player.kill() {
        return None;
    }

    info!(pursuer = ?hit, x = player.pos.x, y = player.pos.y, "player caught");
    Some(hit)
}
