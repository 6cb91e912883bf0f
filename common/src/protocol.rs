use bevy_math::{IRect, IVec2};
use std::ops::Add;

use crate::constants::{GLYPH_HEIGHT, GLYPH_WIDTH, SPRITE_ANCHOR};

// ============================================================================
// Common Data Types
// ============================================================================

// Position in field pixels. Entities may sit outside the field while spawning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<Position> for IVec2 {
    fn from(pos: Position) -> Self {
        Self::new(pos.x, pos.y)
    }
}

impl From<IVec2> for Position {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

// Entity ID - addresses the presentation resources (sprite slot) of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

// ============================================================================
// Input
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}

// Logical direction state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveInput {
    #[must_use]
    pub fn sample(mut is_down: impl FnMut(Direction) -> bool) -> Self {
        Self {
            up: is_down(Direction::Up),
            down: is_down(Direction::Down),
            left: is_down(Direction::Left),
            right: is_down(Direction::Right),
        }
    }

    // Per-axis step for this frame. Opposing directions cancel out.
    #[must_use]
    pub fn step(self) -> Position {
        let x = i32::from(self.right) - i32::from(self.left);
        let y = i32::from(self.down) - i32::from(self.up);
        Position::new(x, y)
    }
}

// ============================================================================
// Sprites
// ============================================================================

// Sprite rectangle of a glyph-sized entity drawn around `pos`
#[must_use]
pub fn sprite_bounds(pos: Position) -> IRect {
    let min = IVec2::from(pos.offset(SPRITE_ANCHOR));
    IRect::from_corners(min, min + IVec2::new(GLYPH_WIDTH, GLYPH_HEIGHT))
}
