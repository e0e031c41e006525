//! Visual configuration for [`FieldView`](super::FieldView)

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Size;

use super::constants::{
    CELL_PADDING_DP, DEFAULT_DENSITY, DESIRED_CELL_SIZE_DP, GRID_STROKE_DP, MARK_STROKE_DP,
};
use crate::field::Cell;
use crate::ui::styling::{
    DEFAULT_GRID_COLOR, DEFAULT_PLAYER1_COLOR, DEFAULT_PLAYER2_COLOR, dp_to_px,
};

/// Colors and pixel dimensions used to draw and measure the board.
///
/// Dimensions are stored in pixels. [`FieldViewStyle::for_density`] derives
/// them from the dp defaults; the `with_*` builders override single values.
///
/// # Examples
///
/// ```ignore
/// let style = FieldViewStyle::for_density(2.0)
///     .with_player1_color(Rgb565::BLUE)
///     .with_grid_stroke(1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldViewStyle {
    /// Color of the X mark
    pub player1_color: Rgb565,

    /// Color of the O mark
    pub player2_color: Rgb565,

    /// Color of the grid lines
    pub grid_color: Rgb565,

    /// Grid line width in pixels
    pub grid_stroke_px: u32,

    /// X and O stroke width in pixels
    pub mark_stroke_px: u32,

    /// Inset of a mark from its cell edges, in pixels
    pub cell_padding_px: u32,

    /// Preferred cell edge length in pixels, used by `measure`
    pub desired_cell_size_px: u32,

    /// Smallest size the view reports from `measure`, padding included
    pub min_size: Size,
}

impl Default for FieldViewStyle {
    fn default() -> Self {
        Self::for_density(DEFAULT_DENSITY)
    }
}

impl FieldViewStyle {
    /// Default colors with dimensions scaled for `density` pixels per dp.
    pub fn for_density(density: f32) -> Self {
        Self {
            player1_color: DEFAULT_PLAYER1_COLOR,
            player2_color: DEFAULT_PLAYER2_COLOR,
            grid_color: DEFAULT_GRID_COLOR,
            grid_stroke_px: dp_to_px(GRID_STROKE_DP, density).max(1),
            mark_stroke_px: dp_to_px(MARK_STROKE_DP, density).max(1),
            cell_padding_px: dp_to_px(CELL_PADDING_DP, density),
            desired_cell_size_px: dp_to_px(DESIRED_CELL_SIZE_DP, density),
            min_size: Size::zero(),
        }
    }

    pub fn with_player1_color(mut self, color: Rgb565) -> Self {
        self.player1_color = color;
        self
    }

    pub fn with_player2_color(mut self, color: Rgb565) -> Self {
        self.player2_color = color;
        self
    }

    pub fn with_grid_color(mut self, color: Rgb565) -> Self {
        self.grid_color = color;
        self
    }

    pub fn with_grid_stroke(mut self, px: u32) -> Self {
        self.grid_stroke_px = px;
        self
    }

    pub fn with_mark_stroke(mut self, px: u32) -> Self {
        self.mark_stroke_px = px;
        self
    }

    pub fn with_cell_padding(mut self, px: u32) -> Self {
        self.cell_padding_px = px;
        self
    }

    pub fn with_desired_cell_size(mut self, px: u32) -> Self {
        self.desired_cell_size_px = px;
        self
    }

    pub fn with_min_size(mut self, size: Size) -> Self {
        self.min_size = size;
        self
    }

    /// Mark color for a cell, `None` for empty cells.
    pub fn mark_color(&self, cell: Cell) -> Option<Rgb565> {
        match cell {
            Cell::PlayerX => Some(self.player1_color),
            Cell::PlayerO => Some(self.player2_color),
            Cell::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::RgbColor;

    #[test]
    fn test_default_colors() {
        let style = FieldViewStyle::default();
        assert_eq!(style.player1_color, Rgb565::GREEN);
        assert_eq!(style.player2_color, Rgb565::RED);
        assert_eq!(style.grid_color, DEFAULT_GRID_COLOR);
    }

    #[test]
    fn test_density_scaling() {
        let base = FieldViewStyle::default();
        assert_eq!(base.desired_cell_size_px, 50);
        assert_eq!(base.cell_padding_px, 7);
        assert_eq!(base.mark_stroke_px, 3);
        assert_eq!(base.grid_stroke_px, 2);

        let dense = FieldViewStyle::for_density(2.0);
        assert_eq!(dense.desired_cell_size_px, 100);
        assert_eq!(dense.cell_padding_px, 14);
        assert_eq!(dense.grid_stroke_px, 3);
    }

    #[test]
    fn test_mark_color() {
        let style = FieldViewStyle::default().with_player2_color(Rgb565::BLUE);
        assert_eq!(style.mark_color(Cell::PlayerX), Some(Rgb565::GREEN));
        assert_eq!(style.mark_color(Cell::PlayerO), Some(Rgb565::BLUE));
        assert_eq!(style.mark_color(Cell::Empty), None);
    }
}
