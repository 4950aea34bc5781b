mod footer_bar;
mod game_block;
mod input;
mod selector_bar;
mod spinner;
mod tile_grid;

pub use footer_bar::{FooterBar, FooterBarStyle, KeyHint};
pub use game_block::{BLOCK_COLORS, BlockHeader, GameBlock};
pub use input::TextInput;
pub use selector_bar::{Choice, SelectorBar};
pub use spinner::{Spinner, SpinnerState};
pub use tile_grid::{GRID_COLUMNS, TileGrid, TileGridState};
