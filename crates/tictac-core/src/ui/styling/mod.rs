//! Styling primitives: colors and layout helpers

pub mod colors;
pub mod layout;

pub use colors::{
    COLOR_BACKGROUND, COLOR_BUTTON, COLOR_BUTTON_PRESSED, DEFAULT_GRID_COLOR,
    DEFAULT_PLAYER1_COLOR, DEFAULT_PLAYER2_COLOR, WHITE,
};
pub use layout::{Padding, dp_to_px};
