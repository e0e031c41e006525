//! Pixel ↔ cell mapping for the board
//!
//! The board is a square-cell grid fitted into the padded view bounds:
//!
//! ```text
//! cell_size  = min(available_width / columns, available_height / rows)
//! field_rect = rows*cell × columns*cell, centered in the available area
//! ```
//!
//! Everything here is plain integer arithmetic on embedded-graphics
//! geometry types so it can be tested without a display.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::styling::Padding;

/// Derived layout of a field inside a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldGeometry {
    field_rect: Rectangle,
    cell_size: u32,
    rows: usize,
    columns: usize,
}

impl FieldGeometry {
    /// Geometry with no drawable area; maps no point to a cell.
    pub fn empty() -> Self {
        Self {
            field_rect: Rectangle::zero(),
            cell_size: 0,
            rows: 0,
            columns: 0,
        }
    }

    /// Fit a `rows × columns` grid into `bounds` minus `padding`.
    pub fn compute(bounds: Rectangle, padding: Padding, rows: usize, columns: usize) -> Self {
        if rows == 0 || columns == 0 {
            return Self::empty();
        }

        let available_width = bounds.size.width.saturating_sub(padding.horizontal());
        let available_height = bounds.size.height.saturating_sub(padding.vertical());

        let cell_width = available_width / columns as u32;
        let cell_height = available_height / rows as u32;
        let cell_size = cell_width.min(cell_height);

        let field_width = cell_size * columns as u32;
        let field_height = cell_size * rows as u32;

        let left = bounds.top_left.x
            + padding.left as i32
            + ((available_width - field_width) / 2) as i32;
        let top = bounds.top_left.y
            + padding.top as i32
            + ((available_height - field_height) / 2) as i32;

        Self {
            field_rect: Rectangle::new(Point::new(left, top), Size::new(field_width, field_height)),
            cell_size,
            rows,
            columns,
        }
    }

    /// Rectangle covered by the grid.
    pub fn field_rect(&self) -> Rectangle {
        self.field_rect
    }

    /// Edge length of one cell in pixels.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Whether there is anything to draw or hit.
    pub fn is_empty(&self) -> bool {
        self.cell_size == 0
    }

    /// Map a display point to `(row, column)`, `None` outside the grid.
    pub fn cell_at(&self, point: Point) -> Option<(usize, usize)> {
        if self.is_empty() || !self.field_rect.contains(point) {
            return None;
        }

        let offset = point - self.field_rect.top_left;
        let row = (offset.y as u32 / self.cell_size) as usize;
        let column = (offset.x as u32 / self.cell_size) as usize;

        (row < self.rows && column < self.columns).then_some((row, column))
    }

    /// Full rectangle of one cell.
    pub fn cell_rect(&self, row: usize, column: usize) -> Rectangle {
        let top_left = self.field_rect.top_left
            + Point::new(
                (column as u32 * self.cell_size) as i32,
                (row as u32 * self.cell_size) as i32,
            );
        Rectangle::new(top_left, Size::new_equal(self.cell_size))
    }

    /// Cell rectangle shrunk by `inset` on every side, `None` if nothing is left.
    pub fn inset_cell_rect(&self, row: usize, column: usize, inset: u32) -> Option<Rectangle> {
        let side = inset
            .checked_mul(2)
            .and_then(|both| self.cell_size.checked_sub(both))
            .filter(|s| *s > 0)?;
        let cell = self.cell_rect(row, column);
        Some(Rectangle::new(
            cell.top_left + Point::new(inset as i32, inset as i32),
            Size::new_equal(side),
        ))
    }

    /// Coordinate of the `index`-th grid line along one axis.
    ///
    /// Lines sit on cell boundaries; the closing line is pulled onto the
    /// last pixel of the grid so it stays inside `field_rect`.
    pub(super) fn line_offset(&self, index: usize, count: usize) -> i32 {
        let extent = self.cell_size * count as u32;
        let offset = (index as u32 * self.cell_size).min(extent.saturating_sub(1));
        offset as i32
    }

    pub(super) fn rows(&self) -> usize {
        self.rows
    }

    pub(super) fn columns(&self) -> usize {
        self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(side: u32) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new_equal(side))
    }

    #[test]
    fn test_three_by_three_in_300px() {
        let geometry = FieldGeometry::compute(square(300), Padding::default(), 3, 3);

        assert_eq!(geometry.cell_size(), 100);
        assert_eq!(geometry.field_rect(), square(300));
        assert_eq!(geometry.cell_at(Point::new(150, 150)), Some((1, 1)));
        assert_eq!(geometry.cell_at(Point::new(0, 0)), Some((0, 0)));
        assert_eq!(geometry.cell_at(Point::new(299, 299)), Some((2, 2)));
        assert_eq!(geometry.cell_at(Point::new(250, 20)), Some((0, 2)));
    }

    #[test]
    fn test_field_is_centered() {
        // 2 rows x 4 columns in 400x300: cell = min(100, 150) = 100
        let bounds = Rectangle::new(Point::zero(), Size::new(400, 300));
        let geometry = FieldGeometry::compute(bounds, Padding::default(), 2, 4);

        assert_eq!(geometry.cell_size(), 100);
        assert_eq!(
            geometry.field_rect(),
            Rectangle::new(Point::new(0, 50), Size::new(400, 200))
        );
    }

    #[test]
    fn test_padding_and_offset_bounds() {
        let bounds = Rectangle::new(Point::new(10, 20), Size::new(220, 200));
        let padding = Padding::new(10, 5, 10, 15);
        let geometry = FieldGeometry::compute(bounds, padding, 3, 3);

        // available 200x180 -> cell 60, field 180x180, 20px spare horizontally
        assert_eq!(geometry.cell_size(), 60);
        assert_eq!(geometry.field_rect().top_left, Point::new(10 + 15 + 10, 20 + 10));
        assert_eq!(geometry.cell_at(Point::new(35, 30)), Some((0, 0)));
        assert_eq!(geometry.cell_at(Point::new(34, 30)), None);
    }

    #[test]
    fn test_points_outside_grid() {
        let bounds = Rectangle::new(Point::zero(), Size::new(400, 300));
        let geometry = FieldGeometry::compute(bounds, Padding::default(), 3, 3);

        // field is 300x300 centered at x = 50
        assert_eq!(geometry.cell_at(Point::new(10, 150)), None);
        assert_eq!(geometry.cell_at(Point::new(360, 150)), None);
        assert_eq!(geometry.cell_at(Point::new(-1, -1)), None);
        assert_eq!(geometry.cell_at(Point::new(50, 0)), Some((0, 0)));
    }

    #[test]
    fn test_too_small_bounds_have_no_cells() {
        let geometry = FieldGeometry::compute(square(2), Padding::default(), 3, 3);
        assert!(geometry.is_empty());
        assert_eq!(geometry.cell_at(Point::new(1, 1)), None);

        let padded = FieldGeometry::compute(square(10), Padding::all(20), 1, 1);
        assert!(padded.is_empty());
    }

    #[test]
    fn test_inset_cell_rect() {
        let geometry = FieldGeometry::compute(square(300), Padding::default(), 3, 3);

        assert_eq!(
            geometry.cell_rect(1, 2),
            Rectangle::new(Point::new(200, 100), Size::new_equal(100))
        );
        assert_eq!(
            geometry.inset_cell_rect(1, 2, 7),
            Some(Rectangle::new(Point::new(207, 107), Size::new_equal(86)))
        );
        assert_eq!(geometry.inset_cell_rect(0, 0, 50), None);
        assert_eq!(geometry.inset_cell_rect(0, 0, u32::MAX), None);
    }

    #[test]
    fn test_line_offsets() {
        let geometry = FieldGeometry::compute(square(300), Padding::default(), 3, 3);
        assert_eq!(geometry.line_offset(0, 3), 0);
        assert_eq!(geometry.line_offset(1, 3), 100);
        assert_eq!(geometry.line_offset(3, 3), 299);
    }
}
