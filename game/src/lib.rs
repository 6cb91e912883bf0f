pub mod autopilot;
pub mod config;
pub mod game;
pub mod presentation;
pub mod reset;
pub mod session;
pub mod systems;

pub use config::{GameConfig, init_tracing};
pub use game::{FrameEvent, Game};
