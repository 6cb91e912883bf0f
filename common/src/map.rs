use bevy_math::{IRect, IVec2};

use crate::{
    constants::{FIELD_HEIGHT, FIELD_WIDTH, SPAWN_MARGIN},
    protocol::Position,
};

// ============================================================================
// Field Geometry
// ============================================================================

// Visible play field. Spans [0, width) x [0, height); pursuers enter from `margin`
// pixels outside one of its edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub width: i32,
    pub height: i32,
    pub margin: i32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            margin: SPAWN_MARGIN,
        }
    }
}

impl Field {
    #[must_use]
    pub const fn new(width: i32, height: i32, margin: i32) -> Self {
        Self { width, height, margin }
    }

    #[must_use]
    pub fn bounds(&self) -> IRect {
        IRect::from_corners(IVec2::ZERO, IVec2::new(self.width, self.height))
    }

    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    #[must_use]
    pub const fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let field = Field::default();
        assert!(field.contains(Position::new(0, 0)));
        assert!(field.contains(Position::new(239, 239)));
        assert!(!field.contains(Position::new(240, 10)));
        assert!(!field.contains(Position::new(10, -1)));
    }

    #[test]
    fn center_matches_player_start() {
        assert_eq!(Field::default().center(), Position::new(120, 120));
    }
}
