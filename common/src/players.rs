use crate::{
    constants::{GHOST_CEL, PLAYER_CEL, PLAYER_ID, PLAYER_START_X, PLAYER_START_Y},
    protocol::{EntityId, MoveInput, Position},
    pursuers::ChaseTarget,
};

// ============================================================================
// Player
// ============================================================================

// The single player of a session. `dead` only ever flips from false to true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: EntityId,
    pub pos: Position,
    dead: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Position::new(PLAYER_START_X, PLAYER_START_Y))
    }
}

impl Player {
    #[must_use]
    pub const fn new(pos: Position) -> Self {
        Self {
            id: EntityId(PLAYER_ID),
            pos,
            dead: false,
        }
    }

    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.dead
    }

    // Returns true only for the call that actually killed the player
    pub const fn kill(&mut self) -> bool {
        let was_alive = !self.dead;
        self.dead = true;
        was_alive
    }

    // Apply one frame of directional input; ignored once dead
    pub fn apply_input(&mut self, input: MoveInput) {
        if !self.dead {
            self.pos = self.pos + input.step();
        }
    }

    #[must_use]
    pub const fn cel(&self) -> (i32, i32) {
        if self.dead { GHOST_CEL } else { PLAYER_CEL }
    }

    #[must_use]
    pub const fn as_target(&self) -> ChaseTarget {
        ChaseTarget {
            pos: self.pos,
            dead: self.dead,
        }
    }
}
