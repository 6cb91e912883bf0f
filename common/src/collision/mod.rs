pub mod helpers;
pub mod pursuers;

pub use helpers::{ranges_overlap_1d, rects_overlap};
pub use pursuers::{first_hit, overlap_pursuer_vs_player, player_hitbox, pursuer_hitbox};
