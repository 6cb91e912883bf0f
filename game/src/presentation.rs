use bevy_math::{IRect, IVec2};
use std::collections::HashSet;
use tracing::{debug, info, trace};

use common::protocol::{Direction, EntityId};

// ============================================================================
// Presentation Collaborator
// ============================================================================

// Graphics source an entity is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual {
    Glyphs,
    Backdrop,
    NotificationStrip,
}

/// Display side of the game. Called from the frame loop and from every pursuer task, so
/// implementations must tolerate concurrent calls.
pub trait Presentation: Send + Sync {
    fn show_entity(&self, id: EntityId, visual: Visual);
    fn set_entity_bounds(&self, id: EntityId, bounds: IRect);
    fn set_entity_viewport_offset(&self, id: EntityId, offset: IVec2);
    fn emit_notification(&self, text: &str);
}

// Headless presentation that turns every call into a tracing event
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPresentation;

impl Presentation for LogPresentation {
    fn show_entity(&self, id: EntityId, visual: Visual) {
        debug!(?id, ?visual, "show entity");
    }

    fn set_entity_bounds(&self, id: EntityId, bounds: IRect) {
        trace!(?id, min = ?bounds.min, max = ?bounds.max, "entity bounds");
    }

    fn set_entity_viewport_offset(&self, id: EntityId, offset: IVec2) {
        trace!(?id, ?offset, "entity viewport");
    }

    fn emit_notification(&self, text: &str) {
        info!("{text}");
    }
}

// ============================================================================
// Input Collaborator
// ============================================================================

// Logical direction state, polled once per frame per direction
pub trait DirectionInput {
    fn is_down(&self, direction: Direction) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

// Physical keys mapped to each logical direction
#[derive(Debug, Clone)]
pub struct KeyBindings {
    up: Vec<Key>,
    down: Vec<Key>,
    left: Vec<Key>,
    right: Vec<Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: vec![Key::W, Key::ArrowUp],
            down: vec![Key::S, Key::ArrowDown],
            left: vec![Key::A, Key::ArrowLeft],
            right: vec![Key::D, Key::ArrowRight],
        }
    }
}

impl KeyBindings {
    #[must_use]
    pub fn keys(&self, direction: Direction) -> &[Key] {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    // First binding of a direction, used when something needs to "press" it
    #[must_use]
    pub fn primary(&self, direction: Direction) -> Option<Key> {
        self.keys(direction).first().copied()
    }
}

// Snapshot of held keys; a direction is down if any of its bindings is held
#[derive(Debug, Clone, Default)]
pub struct KeyboardInput {
    bindings: KeyBindings,
    held: HashSet<Key>,
}

impl KeyboardInput {
    #[must_use]
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
        }
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn press_direction(&mut self, direction: Direction) {
        if let Some(key) = self.bindings.primary(direction) {
            self.press(key);
        }
    }

    #[must_use]
    pub fn with_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        let mut input = Self::default();
        for key in keys {
            input.press(key);
        }
        input
    }
}

impl DirectionInput for KeyboardInput {
    fn is_down(&self, direction: Direction) -> bool {
        self.bindings.keys(direction).iter().any(|key| self.held.contains(key))
    }
}
