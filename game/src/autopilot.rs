use common::{
    map::Field,
    protocol::{Direction, Position},
};

use crate::presentation::KeyboardInput;

// Keep this far from the field edge when running away
const EDGE_PADDING: i32 = 8;

// ============================================================================
// Autopilot
// ============================================================================

// Hold the keys that step the player directly away from the nearest pursuer, without
// running off the field
#[must_use]
pub fn flee_input(player: Position, pursuers: &[Position], field: &Field) -> KeyboardInput {
    let mut input = KeyboardInput::default();

    let Some(nearest) = pursuers
        .iter()
        .min_by_key(|pos| {
            let dx = i64::from(pos.x - player.x);
            let dy = i64::from(pos.y - player.y);
            dx * dx + dy * dy
        })
        .copied()
    else {
        return input;
    };

    if nearest.x > player.x && player.x > EDGE_PADDING {
        input.press_direction(Direction::Left);
    } else if nearest.x < player.x && player.x < field.width - EDGE_PADDING {
        input.press_direction(Direction::Right);
    }

    if nearest.y > player.y && player.y > EDGE_PADDING {
        input.press_direction(Direction::Up);
    } else if nearest.y < player.y && player.y < field.height - EDGE_PADDING {
        input.press_direction(Direction::Down);
    }

    input
}
