use bevy_math::IVec2;

use crate::presentation::{Presentation, Visual};
use common::{constants::*, map::Field, protocol::EntityId};

// ============================================================================
// Backdrop Drift
// ============================================================================

// Two dot layers drifting in circles of different radii
#[derive(Debug, Default, Clone, Copy)]
pub struct Backdrop {
    angle: f64,
}

impl Backdrop {
    pub fn show(field: &Field, presentation: &dyn Presentation) {
        for id in [BACKDROP_NEAR_ID, BACKDROP_FAR_ID] {
            presentation.show_entity(EntityId(id), Visual::Backdrop);
            presentation.set_entity_bounds(EntityId(id), field.bounds());
        }
    }

    pub fn update(&mut self, presentation: &dyn Presentation) {
        self.angle += BACKDROP_DRIFT_PER_FRAME;
        presentation.set_entity_viewport_offset(EntityId(BACKDROP_NEAR_ID), orbit(self.angle, BACKDROP_NEAR_RADIUS));
        presentation.set_entity_viewport_offset(EntityId(BACKDROP_FAR_ID), orbit(self.angle, BACKDROP_FAR_RADIUS));
    }
}

fn orbit(angle: f64, radius: f64) -> IVec2 {
    let (cx, cy) = BACKDROP_CENTER;
    IVec2::new(cx + (angle.cos() * radius) as i32, cy + (angle.sin() * radius) as i32)
}
