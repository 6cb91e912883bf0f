use rand::Rng;

use crate::{
    constants::{CHASE_STEP, FLEE_STEP, PHASE_FRAMES, WOBBLE_FRAMES},
    protocol::{EntityId, Position},
};

// ============================================================================
// Pursuer Phases
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PursuerPhase {
    // Random jitter on the spot
    Wobbling,
    // Greedy per-axis step toward the player (or away, at double speed, once it is dead)
    Chasing,
}

impl PursuerPhase {
    #[must_use]
    pub const fn for_frame(frame: u32) -> Self {
        if frame < WOBBLE_FRAMES {
            Self::Wobbling
        } else {
            Self::Chasing
        }
    }
}

// What a pursuer can see of the player on a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChaseTarget {
    pub pos: Position,
    pub dead: bool,
}

/// A pursuer's position together with its phase counter.
///
/// The counter is always in `[0, PHASE_FRAMES)`. Each call to [`Pursuer::advance`] moves
/// the pursuer according to the phase of the current frame and then bumps the counter,
/// wrapping back into the wobbling phase after the last chasing frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pursuer {
    pub id: EntityId,
    pub pos: Position,
    frame: u32,
}

impl Pursuer {
    #[must_use]
    pub const fn new(id: EntityId, pos: Position) -> Self {
        Self { id, pos, frame: 0 }
    }

    #[must_use]
    pub const fn frame(&self) -> u32 {
        self.frame
    }

    #[must_use]
    pub const fn phase(&self) -> PursuerPhase {
        PursuerPhase::for_frame(self.frame)
    }

    pub fn advance(&mut self, target: ChaseTarget, rng: &mut impl Rng) {
        match self.phase() {
            PursuerPhase::Wobbling => wobble(&mut self.pos, rng),
            PursuerPhase::Chasing => chase(&mut self.pos, target),
        }
        self.frame = (self.frame + 1) % PHASE_FRAMES;
    }
}

// ============================================================================
// Movement Modes
// ============================================================================

pub fn wobble(pos: &mut Position, rng: &mut impl Rng) {
    pos.x += rng.random_range(-1..=1);
    pos.y += rng.random_range(-1..=1);
}

// Not vector-normalized: closing diagonally is faster than along one axis.
pub fn chase(pos: &mut Position, target: ChaseTarget) {
    let step = if target.dead { -FLEE_STEP } else { CHASE_STEP };
    pos.x += axis_step(pos.x, target.pos.x, step);
    pos.y += axis_step(pos.y, target.pos.y, step);
}

const fn axis_step(from: i32, to: i32, step: i32) -> i32 {
    if to < from {
        -step
    } else if to > from {
        step
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn alive_at(x: i32, y: i32) -> ChaseTarget {
        ChaseTarget {
            pos: Position::new(x, y),
            dead: false,
        }
    }

    #[test]
    fn phase_boundaries() {
        assert_eq!(PursuerPhase::for_frame(0), PursuerPhase::Wobbling);
        assert_eq!(PursuerPhase::for_frame(39), PursuerPhase::Wobbling);
        assert_eq!(PursuerPhase::for_frame(40), PursuerPhase::Chasing);
        assert_eq!(PursuerPhase::for_frame(59), PursuerPhase::Chasing);
    }

    #[test]
    fn counter_stays_in_range_and_cycles_every_sixty_ticks() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pursuer = Pursuer::new(EntityId(3), Position::new(0, 0));
        let target = alive_at(100, 100);

        let mut wobbling = 0;
        let mut chasing = 0;
        for tick in 0..600 {
            assert!(pursuer.frame() < PHASE_FRAMES);
            assert_eq!(pursuer.frame(), tick % PHASE_FRAMES);
            match pursuer.phase() {
                PursuerPhase::Wobbling => wobbling += 1,
                PursuerPhase::Chasing => chasing += 1,
            }
            pursuer.advance(target, &mut rng);
        }
        assert_eq!(wobbling, 400);
        assert_eq!(chasing, 200);
        assert_eq!(pursuer.frame(), 0);
    }

    #[test]
    fn wobble_moves_at_most_one_unit_per_axis() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pos = Position::new(50, 50);
        for _ in 0..1_000 {
            let before = pos;
            wobble(&mut pos, &mut rng);
            assert!((pos.x - before.x).abs() <= 1);
            assert!((pos.y - before.y).abs() <= 1);
        }
    }

    #[test]
    fn chase_steps_diagonally_toward_live_player() {
        let mut pos = Position::new(10, 20);
        chase(&mut pos, alive_at(15, 5));
        assert_eq!(pos, Position::new(11, 19));
    }

    #[test]
    fn chase_holds_axis_already_aligned() {
        let mut pos = Position::new(10, 20);
        chase(&mut pos, alive_at(10, 30));
        assert_eq!(pos, Position::new(10, 21));

        chase(&mut pos, alive_at(10, 21));
        assert_eq!(pos, Position::new(10, 21));
    }

    #[test]
    fn dead_player_makes_pursuers_flee_at_double_speed() {
        let mut pos = Position::new(10, 20);
        chase(
            &mut pos,
            ChaseTarget {
                pos: Position::new(15, 5),
                dead: true,
            },
        );
        assert_eq!(pos, Position::new(8, 22));
    }

    #[test]
    fn chasing_frames_close_distance_deterministically() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pursuer = Pursuer::new(EntityId(3), Position::new(0, 0));
        let target = alive_at(1_000, 1_000);

        for _ in 0..WOBBLE_FRAMES {
            pursuer.advance(target, &mut rng);
        }
        let start = pursuer.pos;
        for _ in WOBBLE_FRAMES..PHASE_FRAMES {
            pursuer.advance(target, &mut rng);
        }
        let chase_frames = (PHASE_FRAMES - WOBBLE_FRAMES) as i32;
        assert_eq!(pursuer.pos, Position::new(start.x + chase_frames, start.y + chase_frames));
        assert_eq!(pursuer.phase(), PursuerPhase::Wobbling);
    }
}
