use bevy_math::{IRect, IVec2};

use super::helpers::rects_overlap;
use crate::{
    constants::{PLAYER_HITBOX_MAX, PLAYER_HITBOX_MIN, PURSUER_HALF_EXTENT},
    protocol::{EntityId, Position},
};

#[must_use]
pub fn player_hitbox(pos: Position) -> IRect {
    IRect::from_corners(pos.offset(PLAYER_HITBOX_MIN).into(), pos.offset(PLAYER_HITBOX_MAX).into())
}

#[must_use]
pub fn pursuer_hitbox(pos: Position) -> IRect {
    let half = IVec2::splat(PURSUER_HALF_EXTENT);
    let center = IVec2::from(pos);
    IRect::from_corners(center - half, center + half)
}

#[must_use]
pub fn overlap_pursuer_vs_player(pursuer_pos: Position, player_pos: Position) -> bool {
    rects_overlap(&pursuer_hitbox(pursuer_pos), &player_hitbox(player_pos))
}

// First pursuer, in spawn order, whose hitbox overlaps the player's
pub fn first_hit(
    player_pos: Position,
    pursuers: impl IntoIterator<Item = (EntityId, Position)>,
) -> Option<EntityId> {
    let player_box = player_hitbox(player_pos);
    pursuers
        .into_iter()
        .find(|(_, pos)| rects_overlap(&pursuer_hitbox(*pos), &player_box))
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER: Position = Position::new(120, 120);

    #[test]
    fn player_hitbox_is_skewed_toward_bottom_right() {
        let hitbox = player_hitbox(PLAYER);
        assert_eq!(hitbox.min, IVec2::new(117, 116));
        assert_eq!(hitbox.max, IVec2::new(126, 128));
    }

    #[test]
    fn coincident_pursuer_hits() {
        assert!(overlap_pursuer_vs_player(PLAYER, PLAYER));
    }

    #[test]
    fn touching_edges_do_not_hit() {
        // Pursuer box spans x in [113, 117), player box starts at 117
        assert!(!overlap_pursuer_vs_player(Position::new(115, 120), PLAYER));
        assert!(overlap_pursuer_vs_player(Position::new(116, 120), PLAYER));
        // Player box ends at y = 128; pursuer box starting there misses
        assert!(!overlap_pursuer_vs_player(Position::new(120, 130), PLAYER));
        assert!(overlap_pursuer_vs_player(Position::new(120, 129), PLAYER));
    }

    #[test]
    fn first_hit_reports_earliest_spawn() {
        let pursuers = [
            (EntityId(3), Position::new(0, 0)),
            (EntityId(4), Position::new(121, 121)),
            (EntityId(5), PLAYER),
        ];
        assert_eq!(first_hit(PLAYER, pursuers), Some(EntityId(4)));
        assert_eq!(first_hit(Position::new(-100, -100), pursuers), None);
    }
}
