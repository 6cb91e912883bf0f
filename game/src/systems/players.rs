use crate::{
    presentation::{DirectionInput, Presentation},
    session::SharedPlayer,
};
use common::protocol::{MoveInput, Position, sprite_bounds};

// ============================================================================
// Player Controller
// ============================================================================

// Runs once per frame, before collision detection. Alive: move one unit per held
// direction. Dead: stay put and show the ghost cel.
pub fn player_controller_system(
    player: &SharedPlayer,
    directions: &impl DirectionInput,
    presentation: &dyn Presentation,
) -> Position {
    let input = MoveInput::sample(|direction| directions.is_down(direction));

    let mut player = player.write();
    player.apply_input(input);

    presentation.set_entity_bounds(player.id, sprite_bounds(player.pos));
    if player.is_dead() {
        presentation.set_entity_viewport_offset(player.id, player.cel().into());
    }
    player.pos
}
