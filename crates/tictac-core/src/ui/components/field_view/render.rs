//! Grid and mark rendering

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

use super::geometry::FieldGeometry;
use super::style::FieldViewStyle;
use crate::field::{Cell, Field};

/// Draw `rows + 1` horizontal and `columns + 1` vertical lines over the grid.
pub(super) fn draw_grid<D: DrawTarget<Color = Rgb565>>(
    geometry: &FieldGeometry,
    style: &FieldViewStyle,
    display: &mut D,
) -> Result<(), D::Error> {
    let rect = geometry.field_rect();
    let Some(bottom_right) = rect.bottom_right() else {
        return Ok(());
    };
    let line_style = PrimitiveStyle::with_stroke(style.grid_color, style.grid_stroke_px);
    let origin = rect.top_left;

    for i in 0..=geometry.rows() {
        let y = origin.y + geometry.line_offset(i, geometry.rows());
        Line::new(Point::new(origin.x, y), Point::new(bottom_right.x, y))
            .into_styled(line_style)
            .draw(display)?;
    }

    for j in 0..=geometry.columns() {
        let x = origin.x + geometry.line_offset(j, geometry.columns());
        Line::new(Point::new(x, origin.y), Point::new(x, bottom_right.y))
            .into_styled(line_style)
            .draw(display)?;
    }

    Ok(())
}

/// Draw an X or O in every occupied cell.
pub(super) fn draw_marks<D: DrawTarget<Color = Rgb565>>(
    field: &Field,
    geometry: &FieldGeometry,
    style: &FieldViewStyle,
    display: &mut D,
) -> Result<(), D::Error> {
    for (row, column, cell) in field.cells() {
        let Some(color) = style.mark_color(cell) else {
            continue;
        };
        let Some(area) = geometry.inset_cell_rect(row, column, style.cell_padding_px) else {
            continue;
        };
        let Some(bottom_right) = area.bottom_right() else {
            continue;
        };
        let stroke = PrimitiveStyle::with_stroke(color, style.mark_stroke_px);

        match cell {
            Cell::PlayerX => {
                let top_left = area.top_left;
                Line::new(top_left, bottom_right)
                    .into_styled(stroke)
                    .draw(display)?;
                Line::new(
                    Point::new(bottom_right.x, top_left.y),
                    Point::new(top_left.x, bottom_right.y),
                )
                .into_styled(stroke)
                .draw(display)?;
            }
            Cell::PlayerO => {
                Circle::new(area.top_left, area.size.width)
                    .into_styled(stroke)
                    .draw(display)?;
            }
            Cell::Empty => {}
        }
    }

    Ok(())
}
