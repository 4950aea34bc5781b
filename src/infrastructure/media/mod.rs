//! Audio playback adapters.

mod process_player;

pub use process_player::{DEFAULT_PLAYER, DEFAULT_PLAYER_ARGS, ProcessPlayer};
