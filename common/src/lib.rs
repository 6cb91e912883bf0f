pub mod collision;
pub mod constants;
pub mod map;
pub mod players;
pub mod protocol;
pub mod pursuers;
pub mod spawning;
