use rand::Rng;

use crate::{map::Field, protocol::Position};

// ============================================================================
// Pursuer Spawning
// ============================================================================

// Border of the field a pursuer enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnSide {
    North,
    East,
    South,
    West,
}

impl SpawnSide {
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    // Panics on anything outside 0..4; the caller draws from exactly that range.
    #[must_use]
    pub fn from_index(index: u32) -> Self {
        match index {
            0 => Self::North,
            1 => Self::East,
            2 => Self::South,
            3 => Self::West,
            _ => unreachable!("spawn side index out of range: {index}"),
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::from_index(rng.random_range(0..4))
    }
}

// Position `margin` pixels outside `side`, uniform along the parallel axis
#[must_use]
pub fn spawn_point_on(field: &Field, side: SpawnSide, along: i32) -> Position {
    match side {
        SpawnSide::North => Position::new(along, -field.margin),
        SpawnSide::East => Position::new(field.width + field.margin, along),
        SpawnSide::South => Position::new(along, field.height + field.margin),
        SpawnSide::West => Position::new(-field.margin, along),
    }
}

// Pick a uniformly random border and a uniformly random point along it
pub fn random_spawn_point(field: &Field, rng: &mut impl Rng) -> (SpawnSide, Position) {
    let side = SpawnSide::random(rng);
    let span = match side {
        SpawnSide::North | SpawnSide::South => field.width,
        SpawnSide::East | SpawnSide::West => field.height,
    };
    let along = rng.random_range(0..span);
    (side, spawn_point_on(field, side, along))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn spawn_points_sit_exactly_one_margin_outside() {
        let field = Field::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..2_000 {
            let (side, pos) = random_spawn_point(&field, &mut rng);
            assert!(!field.contains(pos), "{pos:?} should be off-field");
            match side {
                SpawnSide::North => {
                    assert_eq!(pos.y, -field.margin);
                    assert!((0..field.width).contains(&pos.x));
                }
                SpawnSide::South => {
                    assert_eq!(pos.y, field.height + field.margin);
                    assert!((0..field.width).contains(&pos.x));
                }
                SpawnSide::East => {
                    assert_eq!(pos.x, field.width + field.margin);
                    assert!((0..field.height).contains(&pos.y));
                }
                SpawnSide::West => {
                    assert_eq!(pos.x, -field.margin);
                    assert!((0..field.height).contains(&pos.y));
                }
            }
        }
    }

    #[test]
    fn every_side_gets_picked() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let side = SpawnSide::random(&mut rng);
            let index = SpawnSide::ALL.iter().position(|s| *s == side).expect("known side");
            seen[index] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn non_square_field_uses_matching_span() {
        let field = Field::new(100, 50, 5);
        assert_eq!(spawn_point_on(&field, SpawnSide::East, 49), Position::new(105, 49));
        assert_eq!(spawn_point_on(&field, SpawnSide::South, 99), Position::new(99, 55));
    }

    #[test]
    #[should_panic(expected = "spawn side index out of range")]
    fn invalid_side_index_is_fatal() {
        let _ = SpawnSide::from_index(4);
    }
}
