#![allow(dead_code)]

use bevy_math::{IRect, IVec2};
use std::sync::{Arc, Mutex};

use game::{
    Game, GameConfig,
    presentation::{Presentation, Visual},
};
use common::protocol::EntityId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Show(EntityId, Visual),
    Bounds(EntityId, IRect),
    Viewport(EntityId, IVec2),
    Notify(String),
}

// Presentation double that records every call
#[derive(Debug, Default)]
pub struct Recorder {
    calls: Mutex<Vec<Call>>,
}

impl Recorder {
    pub fn notifications(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                Call::Notify(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn shown(&self) -> Vec<EntityId> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                Call::Show(id, _) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn last_viewport(&self, id: EntityId) -> Option<IVec2> {
        self.calls.lock().unwrap().iter().rev().find_map(|call| match call {
            Call::Viewport(target, offset) if *target == id => Some(*offset),
            _ => None,
        })
    }

    pub fn bounds_count(&self, id: EntityId) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| matches!(call, Call::Bounds(target, _) if *target == id))
            .count()
    }
}

impl Presentation for Recorder {
    fn show_entity(&self, id: EntityId, visual: Visual) {
        self.calls.lock().unwrap().push(Call::Show(id, visual));
    }

    fn set_entity_bounds(&self, id: EntityId, bounds: IRect) {
        self.calls.lock().unwrap().push(Call::Bounds(id, bounds));
    }

    fn set_entity_viewport_offset(&self, id: EntityId, offset: IVec2) {
        self.calls.lock().unwrap().push(Call::Viewport(id, offset));
    }

    fn emit_notification(&self, text: &str) {
        self.calls.lock().unwrap().push(Call::Notify(text.to_owned()));
    }
}

pub fn seeded_config(seed: u64) -> GameConfig {
    GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    }
}

pub fn start(config: GameConfig) -> (Game, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let game = Game::start(config, recorder.clone()).expect("game should start");
    (game, recorder)
}
