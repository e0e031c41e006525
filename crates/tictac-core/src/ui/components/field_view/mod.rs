//! Tic-tac-toe board widget
//!
//! [`FieldView`] draws a [`Field`] as a grid of square cells and turns taps
//! into `(row, column)` callbacks. It performs no game logic: whatever the
//! tap callback writes into the field is picked up through the field's
//! change listeners and marks the view dirty.
//!
//! # Lifecycle
//!
//! ```text
//! new ─► set_field ─► measure ─► set_bounds ─► draw / handle_touch ...
//!            │                                         │
//!            └── old field returned, listener removed  └── on_cell_action(row, col, &mut field)
//! ```
//!
//! # Examples
//!
//! ```ignore
//! let mut view = FieldView::new(FieldViewStyle::default());
//! view.set_field(Some(Field::new(3, 3)?));
//! view.set_bounds(Rectangle::new(Point::zero(), Size::new(300, 300)));
//! view.set_on_cell_action(|row, column, field| {
//!     field.set(row, column, Cell::PlayerX).ok();
//! });
//! ```

mod constants;
mod geometry;
mod render;
mod style;

pub use constants::{CELL_PADDING_DP, DESIRED_CELL_SIZE_DP, GRID_STROKE_DP, MARK_STROKE_DP};
pub use geometry::FieldGeometry;
pub use style::FieldViewStyle;

use core::cell::Cell as Flag;

use alloc::boxed::Box;
use alloc::rc::Rc;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use crate::field::{Cell, Field, FieldResult, ListenerId};
use crate::ui::core::{Drawable, MeasureSpec, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::styling::Padding;

/// Callback invoked with `(row, column, field)` for a tap on a cell.
pub type CellActionListener = Box<dyn FnMut(usize, usize, &mut Field)>;

/// Board widget rendering an optional [`Field`].
pub struct FieldView {
    bounds: Rectangle,
    padding: Padding,
    style: FieldViewStyle,
    field: Option<Field>,
    field_listener: Option<ListenerId>,
    attached: bool,
    geometry: FieldGeometry,
    on_cell_action: Option<CellActionListener>,
    dirty: Rc<Flag<bool>>,
    layout_requested: bool,
    touch_claimed: bool,
}

impl FieldView {
    /// Create an attached view without a field and with zero-sized bounds.
    pub fn new(style: FieldViewStyle) -> Self {
        Self {
            bounds: Rectangle::zero(),
            padding: Padding::default(),
            style,
            field: None,
            field_listener: None,
            attached: true,
            geometry: FieldGeometry::empty(),
            on_cell_action: None,
            dirty: Rc::new(Flag::new(true)),
            layout_requested: false,
            touch_claimed: false,
        }
    }

    pub fn with_bounds(mut self, bounds: Rectangle) -> Self {
        self.set_bounds(bounds);
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.set_padding(padding);
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.set_field(Some(field));
        self
    }

    pub fn field(&self) -> Option<&Field> {
        self.field.as_ref()
    }

    /// Mutable access to the current field; writes still notify listeners.
    pub fn field_mut(&mut self) -> Option<&mut Field> {
        self.field.as_mut()
    }

    /// Replace the displayed field, returning the previous one.
    ///
    /// The view's listener is moved from the old field to the new one. The
    /// layout is recomputed, a re-measure is requested and the view is
    /// marked dirty.
    pub fn set_field(&mut self, field: Option<Field>) -> Option<Field> {
        let mut old = self.field.take();
        if let (Some(old_field), Some(id)) = (old.as_mut(), self.field_listener.take()) {
            old_field.remove_listener(id);
        }

        self.field = field;
        if self.attached {
            self.register_listener();
        }

        match &self.field {
            Some(f) => debug!("Field view showing {}x{} field", f.rows(), f.columns()),
            None => debug!("Field view cleared"),
        }

        self.update_geometry();
        self.layout_requested = true;
        self.dirty.set(true);
        old
    }

    /// Install the tap callback, replacing any previous one.
    pub fn set_on_cell_action<F>(&mut self, listener: F)
    where
        F: FnMut(usize, usize, &mut Field) + 'static,
    {
        self.on_cell_action = Some(Box::new(listener));
    }

    pub fn style(&self) -> &FieldViewStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: FieldViewStyle) {
        if self.style != style {
            self.style = style;
            self.layout_requested = true;
            self.dirty.set(true);
        }
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Padding) {
        if self.padding != padding {
            self.padding = padding;
            self.update_geometry();
            self.layout_requested = true;
            self.dirty.set(true);
        }
    }

    /// Assign the area the host layout gave this view.
    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.update_geometry();
            self.dirty.set(true);
        }
    }

    /// Current grid layout inside the bounds.
    pub fn geometry(&self) -> &FieldGeometry {
        &self.geometry
    }

    /// Size this view wants given the host's constraints.
    ///
    /// Without a field the desired content size is zero, leaving just
    /// padding (or the configured minimum size).
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let (rows, columns) = self
            .field
            .as_ref()
            .map_or((0, 0), |f| (f.rows() as u32, f.columns() as u32));
        let cell = self.style.desired_cell_size_px;

        let min_width = self.style.min_size.width.saturating_add(self.padding.horizontal());
        let min_height = self.style.min_size.height.saturating_add(self.padding.vertical());
        let desired_width = min_width.max(
            columns
                .saturating_mul(cell)
                .saturating_add(self.padding.horizontal()),
        );
        let desired_height = min_height.max(
            rows.saturating_mul(cell)
                .saturating_add(self.padding.vertical()),
        );

        self.layout_requested = false;
        Size::new(width.resolve(desired_width), height.resolve(desired_height))
    }

    /// Whether a change since the last `measure` may alter the desired size.
    pub fn is_layout_requested(&self) -> bool {
        self.layout_requested
    }

    /// The view joined a live screen: start listening to the field.
    pub fn on_attach(&mut self) {
        if !self.attached {
            self.attached = true;
            self.register_listener();
            self.dirty.set(true);
        }
    }

    /// The view left the screen: stop listening to the field.
    pub fn on_detach(&mut self) {
        if self.attached {
            self.attached = false;
            self.touch_claimed = false;
            if let (Some(field), Some(id)) = (self.field.as_mut(), self.field_listener.take()) {
                field.remove_listener(id);
            }
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    fn register_listener(&mut self) {
        if self.field_listener.is_some() {
            return;
        }
        if let Some(field) = self.field.as_mut() {
            let dirty = self.dirty.clone();
            self.field_listener = Some(field.add_listener(move |_| dirty.set(true)));
        }
    }

    fn update_geometry(&mut self) {
        self.geometry = match &self.field {
            Some(field) => {
                FieldGeometry::compute(self.bounds, self.padding, field.rows(), field.columns())
            }
            None => FieldGeometry::empty(),
        };
        debug!(
            "Field view layout: cell {}px, grid {:?}",
            self.geometry.cell_size(),
            self.geometry.field_rect()
        );
    }

    fn release_at(&mut self, point: TouchPoint) -> TouchResult {
        let Some((row, column)) = self.geometry.cell_at(point.to_point()) else {
            return TouchResult::NotHandled;
        };
        let Some(field) = self.field.as_mut() else {
            return TouchResult::NotHandled;
        };

        debug!("Tap on cell ({}, {})", row, column);
        if let Some(listener) = self.on_cell_action.as_mut() {
            listener(row, column, field);
        }
        TouchResult::Handled
    }
}

impl Drawable for FieldView {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let Some(field) = &self.field else {
            return Ok(());
        };
        if self.geometry.is_empty() {
            return Ok(());
        }

        render::draw_grid(&self.geometry, &self.style, display)?;
        render::draw_marks(field, &self.geometry, &self.style, display)
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    fn mark_clean(&mut self) {
        self.dirty.set(false);
    }

    fn mark_dirty(&mut self) {
        self.dirty.set(true);
    }
}

impl Touchable for FieldView {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        if self.field.is_none() {
            self.touch_claimed = false;
            return TouchResult::NotHandled;
        }

        match event {
            TouchEvent::Press(point) if self.contains_point(point) => {
                self.touch_claimed = true;
                TouchResult::Handled
            }
            TouchEvent::Drag(_) if self.touch_claimed => TouchResult::Handled,
            TouchEvent::Release(point) if self.touch_claimed => {
                self.touch_claimed = false;
                self.release_at(point)
            }
            _ => TouchResult::NotHandled,
        }
    }
}

/// Sample 8×6 field with one mark per player, for previewing the widget.
pub fn preview_field() -> FieldResult<Field> {
    let mut field = Field::new(8, 6)?;
    field.set(2, 2, Cell::PlayerX)?;
    field.set(3, 3, Cell::PlayerO)?;
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use embedded_graphics::mock_display::MockDisplay;

    fn square(side: u32) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new_equal(side))
    }

    fn press_release(view: &mut FieldView, x: u16, y: u16) -> TouchResult {
        let point = TouchPoint::new(x, y);
        view.handle_touch(TouchEvent::Press(point));
        view.handle_touch(TouchEvent::Release(point))
    }

    fn recording_view(field: Field, side: u32) -> (FieldView, Rc<RefCell<Vec<(usize, usize)>>>) {
        let taps = Rc::new(RefCell::new(Vec::new()));
        let mut view = FieldView::new(FieldViewStyle::default())
            .with_field(field)
            .with_bounds(square(side));
        let log = taps.clone();
        view.set_on_cell_action(move |row, column, _| log.borrow_mut().push((row, column)));
        (view, taps)
    }

    /// Style with 1px strokes so single pixels can be asserted.
    fn thin_style() -> FieldViewStyle {
        FieldViewStyle::default()
            .with_grid_stroke(1)
            .with_mark_stroke(1)
            .with_cell_padding(4)
    }

    fn mock_display() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    #[test]
    fn test_release_maps_to_center_cell() {
        let (mut view, taps) = recording_view(Field::new(3, 3).unwrap(), 300);

        assert_eq!(view.geometry().cell_size(), 100);
        assert_eq!(press_release(&mut view, 150, 150), TouchResult::Handled);
        assert_eq!(*taps.borrow(), vec![(1, 1)]);
    }

    #[test]
    fn test_release_outside_grid_is_ignored() {
        let (mut view, taps) = recording_view(Field::new(3, 3).unwrap(), 300);
        view.set_bounds(Rectangle::new(Point::zero(), Size::new(400, 300)));

        // grid spans x = 50..350
        assert_eq!(press_release(&mut view, 20, 150), TouchResult::NotHandled);
        assert_eq!(press_release(&mut view, 390, 10), TouchResult::NotHandled);
        assert!(taps.borrow().is_empty());
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let (mut view, taps) = recording_view(Field::new(3, 3).unwrap(), 300);

        let result = view.handle_touch(TouchEvent::Release(TouchPoint::new(10, 10)));
        assert_eq!(result, TouchResult::NotHandled);
        assert!(taps.borrow().is_empty());
    }

    #[test]
    fn test_press_outside_bounds_not_claimed() {
        let (mut view, taps) = recording_view(Field::new(3, 3).unwrap(), 300);
        view.set_bounds(Rectangle::new(Point::new(0, 40), Size::new(300, 300)));

        assert_eq!(
            view.handle_touch(TouchEvent::Press(TouchPoint::new(10, 10))),
            TouchResult::NotHandled
        );
        view.handle_touch(TouchEvent::Release(TouchPoint::new(150, 150)));
        assert!(taps.borrow().is_empty());
    }

    #[test]
    fn test_drag_then_release_uses_release_point() {
        let (mut view, taps) = recording_view(Field::new(3, 3).unwrap(), 300);

        view.handle_touch(TouchEvent::Press(TouchPoint::new(10, 10)));
        assert_eq!(
            view.handle_touch(TouchEvent::Drag(TouchPoint::new(120, 250))),
            TouchResult::Handled
        );
        view.handle_touch(TouchEvent::Release(TouchPoint::new(250, 250)));
        assert_eq!(*taps.borrow(), vec![(2, 2)]);
    }

    #[test]
    fn test_no_field_claims_nothing() {
        let mut view = FieldView::new(FieldViewStyle::default()).with_bounds(square(300));
        assert_eq!(press_release(&mut view, 150, 150), TouchResult::NotHandled);
    }

    #[test]
    fn test_tap_callback_writes_mark_dirty() {
        let mut view = FieldView::new(FieldViewStyle::default())
            .with_field(Field::new(3, 3).unwrap())
            .with_bounds(square(300));
        view.set_on_cell_action(|row, column, field| {
            field.set(row, column, Cell::PlayerX).unwrap();
        });
        view.mark_clean();

        press_release(&mut view, 50, 250);

        assert!(view.is_dirty());
        assert_eq!(view.field().unwrap().get(2, 0).unwrap(), Cell::PlayerX);
    }

    #[test]
    fn test_replacing_field_moves_listener() {
        let mut view = FieldView::new(FieldViewStyle::default()).with_field(Field::new(3, 3).unwrap());
        assert_eq!(view.field().unwrap().listener_count(), 1);

        let mut old = view.set_field(Some(Field::new(4, 5).unwrap())).unwrap();
        assert_eq!(old.listener_count(), 0);
        assert_eq!(view.field().unwrap().listener_count(), 1);

        // writes to the detached field no longer dirty the view
        view.mark_clean();
        old.set(0, 0, Cell::PlayerO).unwrap();
        assert!(!view.is_dirty());

        view.field_mut().unwrap().set(3, 4, Cell::PlayerO).unwrap();
        assert!(view.is_dirty());
    }

    #[test]
    fn test_replacing_field_relayouts() {
        let mut view = FieldView::new(FieldViewStyle::default())
            .with_field(Field::new(3, 3).unwrap())
            .with_bounds(square(300));
        view.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert!(!view.is_layout_requested());

        view.set_field(Some(Field::new(6, 6).unwrap()));
        assert_eq!(view.geometry().cell_size(), 50);
        assert!(view.is_layout_requested());

        view.set_field(None);
        assert!(view.geometry().is_empty());
    }

    #[test]
    fn test_detach_and_attach() {
        let mut view = FieldView::new(FieldViewStyle::default()).with_field(Field::new(3, 3).unwrap());

        view.on_detach();
        assert!(!view.is_attached());
        assert_eq!(view.field().unwrap().listener_count(), 0);

        view.mark_clean();
        view.field_mut().unwrap().set(1, 1, Cell::PlayerX).unwrap();
        assert!(!view.is_dirty());

        // a field set while detached is not observed until attach
        view.set_field(Some(Field::new(3, 3).unwrap()));
        assert_eq!(view.field().unwrap().listener_count(), 0);

        view.on_attach();
        view.on_attach();
        assert_eq!(view.field().unwrap().listener_count(), 1);
    }

    #[test]
    fn test_measure_uses_desired_cell_size() {
        let mut view = FieldView::new(FieldViewStyle::default())
            .with_field(Field::new(3, 4).unwrap())
            .with_padding(Padding::symmetric(5, 10));

        assert_eq!(
            view.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified),
            Size::new(4 * 50 + 20, 3 * 50 + 10)
        );
        assert_eq!(
            view.measure(MeasureSpec::AtMost(100), MeasureSpec::Exactly(400)),
            Size::new(100, 400)
        );
    }

    #[test]
    fn test_measure_saturates_huge_cell_size() {
        let mut view = FieldView::new(
            FieldViewStyle::default().with_desired_cell_size(u32::MAX / 2),
        )
        .with_field(Field::new(3, 3).unwrap())
        .with_padding(Padding::all(4));

        assert_eq!(
            view.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified),
            Size::new(u32::MAX, u32::MAX)
        );
        assert_eq!(
            view.measure(MeasureSpec::AtMost(200), MeasureSpec::AtMost(100)),
            Size::new(200, 100)
        );
    }

    #[test]
    fn test_measure_without_field_uses_minimum() {
        let mut view = FieldView::new(
            FieldViewStyle::default().with_min_size(Size::new(30, 40)),
        )
        .with_padding(Padding::all(2));

        assert_eq!(
            view.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified),
            Size::new(34, 44)
        );
    }

    #[test]
    fn test_draw_grid_lines() {
        let grid = Rgb565::new(10, 20, 10);
        let mut view = FieldView::new(thin_style().with_grid_color(grid))
            .with_field(Field::new(2, 2).unwrap())
            .with_bounds(square(40));
        let mut display = mock_display();

        view.draw(&mut display).unwrap();

        // vertical lines at x = 0, 20, 39
        for x in [0, 20, 39] {
            assert_eq!(display.get_pixel(Point::new(x, 10)), Some(grid));
        }
        // horizontal lines at y = 0, 20, 39
        for y in [0, 20, 39] {
            assert_eq!(display.get_pixel(Point::new(10, y)), Some(grid));
        }
        assert_eq!(display.get_pixel(Point::new(10, 10)), None);
        view.mark_clean();
        assert!(!view.is_dirty());
    }

    #[test]
    fn test_draw_marks() {
        let mut field = Field::new(2, 2).unwrap();
        field.set(0, 0, Cell::PlayerX).unwrap();
        field.set(1, 1, Cell::PlayerO).unwrap();
        let style = thin_style();
        let view = FieldView::new(style)
            .with_field(field)
            .with_bounds(square(40));
        let mut display = mock_display();

        view.draw(&mut display).unwrap();

        // X in cell (0, 0): inset area (4,4)..(15,15), diagonals cross at the middle
        assert_eq!(display.get_pixel(Point::new(4, 4)), Some(style.player1_color));
        assert_eq!(display.get_pixel(Point::new(15, 15)), Some(style.player1_color));
        assert_eq!(display.get_pixel(Point::new(15, 4)), Some(style.player1_color));

        // O in cell (1, 1): hollow circle inside (24,24)..(35,35)
        assert_eq!(display.get_pixel(Point::new(30, 30)), None);
        let ring_on_top_edge = (23..=25).any(|y| {
            (24..36).any(|x| display.get_pixel(Point::new(x, y)) == Some(style.player2_color))
        });
        assert!(ring_on_top_edge);

        // empty cells stay blank
        assert_eq!(display.get_pixel(Point::new(30, 10)), None);
    }

    #[test]
    fn test_huge_cell_padding_hides_marks() {
        let mut field = Field::new(2, 2).unwrap();
        field.set(0, 0, Cell::PlayerX).unwrap();
        let style = thin_style().with_cell_padding(u32::MAX);
        let view = FieldView::new(style)
            .with_field(field)
            .with_bounds(square(40));
        let mut display = mock_display();

        view.draw(&mut display).unwrap();

        assert_eq!(display.get_pixel(Point::new(4, 4)), None);
        assert_eq!(display.get_pixel(Point::new(0, 10)), Some(style.grid_color));
    }

    #[test]
    fn test_draw_without_field_is_blank() {
        let view = FieldView::new(thin_style()).with_bounds(square(40));
        let mut display = mock_display();

        view.draw(&mut display).unwrap();
        for y in 0..40 {
            for x in 0..40 {
                assert_eq!(display.get_pixel(Point::new(x, y)), None);
            }
        }
    }

    #[test]
    fn test_set_style_marks_dirty() {
        let mut view = FieldView::new(FieldViewStyle::default());
        view.mark_clean();

        view.set_style(FieldViewStyle::default());
        assert!(!view.is_dirty());

        view.set_style(FieldViewStyle::default().with_grid_color(Rgb565::new(1, 2, 3)));
        assert!(view.is_dirty());
        assert_eq!(view.style().grid_color, Rgb565::new(1, 2, 3));
    }

    #[test]
    fn test_preview_field() {
        let field = preview_field().unwrap();
        assert_eq!((field.rows(), field.columns()), (8, 6));
        assert_eq!(field.get(2, 2).unwrap(), Cell::PlayerX);
        assert_eq!(field.get(3, 3).unwrap(), Cell::PlayerO);
        assert_eq!(field.cells().filter(|(_, _, c)| *c != Cell::Empty).count(), 2);
    }
}
