pub mod backdrop;
pub mod collision;
pub mod players;
pub mod pursuers;
pub mod spawner;

pub use backdrop::Backdrop;
pub use collision::player_collision_system;
pub use players::player_controller_system;
pub use pursuers::{PursuerTask, pursuer_task};
pub use spawner::spawner_task;
