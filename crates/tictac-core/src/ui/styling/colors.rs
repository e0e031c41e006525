//! Color definitions for the board and its host screen
//!
//! All colors are RGB565, matching the 16-bit displays the UI targets.
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Board Colors
// ============================================================================

/// Default mark color for the first player (X) - pure green
pub const DEFAULT_PLAYER1_COLOR: Rgb565 = Rgb565::new(0, 255 >> 2, 0);

/// Default mark color for the second player (O) - pure red
pub const DEFAULT_PLAYER2_COLOR: Rgb565 = Rgb565::new(255 >> 3, 0, 0);

/// Default grid line color - mid gray (#888888)
pub const DEFAULT_GRID_COLOR: Rgb565 = Rgb565::new(136 >> 3, 136 >> 2, 136 >> 3);

// ============================================================================
// Screen Colors
// ============================================================================

/// Screen background - very dark gray-blue
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(18 >> 3, 23 >> 2, 24 >> 3);

/// Button fill - dark teal
pub const COLOR_BUTTON: Rgb565 = Rgb565::new(29 >> 3, 90 >> 2, 80 >> 3);

/// Button fill while held down
pub const COLOR_BUTTON_PRESSED: Rgb565 = Rgb565::new(20 >> 3, 60 >> 2, 54 >> 3);

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);
