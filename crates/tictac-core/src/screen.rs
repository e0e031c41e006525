//! Host screen: a "Randomize" button above the board.
//!
//! The screen owns the [`FieldView`] and installs a tap handler that plays
//! alternating turns: tapping an empty cell writes the current player's
//! mark and passes the turn, tapping an occupied cell does nothing. X moves
//! first, and the turn carries over when the field is replaced.

use core::cell::Cell as Flag;

use alloc::rc::Rc;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use log::{debug, error, info};
use rand::Rng;

use crate::field::{Cell, Field, FieldResult};
use crate::ui::components::field_view::preview_field;
use crate::ui::styling::COLOR_BACKGROUND;
use crate::ui::{
    Action, Button, Drawable, FieldView, FieldViewStyle, MeasureSpec, Padding, TouchEvent,
    TouchResult, Touchable,
};

/// Height of the band holding the button
const HEADER_HEIGHT_PX: u32 = 40;

/// Inset of the button inside the header band
const BUTTON_MARGIN_PX: u32 = 6;

/// Width of the "Randomize" button
const BUTTON_WIDTH_PX: u32 = 100;

/// Padding between the board view's edge and its grid
const FIELD_PADDING_PX: u32 = 8;

/// Smallest edge length of a randomized field
const RANDOM_MIN_SIDE: usize = 3;

/// Exclusive upper bound on a randomized field's edge length
const RANDOM_MAX_SIDE: usize = 10;

/// Edge length of the field shown on a fresh screen
const INITIAL_SIDE: usize = 3;

/// Screen combining the randomize button and the board.
pub struct GameScreen<R: Rng> {
    bounds: Rectangle,
    randomize_button: Button,
    field_view: FieldView,
    player_x_turn: Rc<Flag<bool>>,
    rng: R,
    dirty: bool,
}

impl<R: Rng> GameScreen<R> {
    /// Create a screen filling `bounds`, showing an empty 3×3 field.
    pub fn new(bounds: Rectangle, style: FieldViewStyle, rng: R) -> FieldResult<Self> {
        let button_bounds = Rectangle::new(
            bounds.top_left + Point::new(BUTTON_MARGIN_PX as i32, BUTTON_MARGIN_PX as i32),
            Size::new(
                BUTTON_WIDTH_PX,
                HEADER_HEIGHT_PX.saturating_sub(2 * BUTTON_MARGIN_PX),
            ),
        );

        let mut screen = Self {
            bounds,
            randomize_button: Button::new(button_bounds, "Randomize", Action::RandomizeField),
            field_view: FieldView::new(style)
                .with_padding(Padding::all(FIELD_PADDING_PX))
                .with_field(Field::new(INITIAL_SIDE, INITIAL_SIDE)?),
            player_x_turn: Rc::new(Flag::new(true)),
            rng,
            dirty: true,
        };
        screen.install_turn_handler();
        screen.layout();
        Ok(screen)
    }

    pub fn field_view(&self) -> &FieldView {
        &self.field_view
    }

    /// Mark the next tap on an empty cell will place.
    pub fn next_mark(&self) -> Cell {
        if self.player_x_turn.get() {
            Cell::PlayerX
        } else {
            Cell::PlayerO
        }
    }

    /// Replace the field with a randomly sized, randomly filled one.
    pub fn randomize(&mut self) -> FieldResult<()> {
        let rows = self.rng.gen_range(RANDOM_MIN_SIDE..RANDOM_MAX_SIDE);
        let columns = self.rng.gen_range(RANDOM_MIN_SIDE..RANDOM_MAX_SIDE);
        let mut field = Field::new(rows, columns)?;

        for row in 0..rows {
            for column in 0..columns {
                let cell = match self.rng.gen_range(0..3) {
                    0 => Cell::PlayerX,
                    1 => Cell::PlayerO,
                    _ => Cell::Empty,
                };
                field.set(row, column, cell)?;
            }
        }

        info!("Randomized field: {}x{}", rows, columns);
        self.replace_field(field);
        Ok(())
    }

    /// Show the 8×6 preview field.
    pub fn show_preview(&mut self) -> FieldResult<()> {
        self.replace_field(preview_field()?);
        Ok(())
    }

    /// Start over on an empty `rows × columns` field.
    pub fn reset(&mut self, rows: usize, columns: usize) -> FieldResult<()> {
        self.replace_field(Field::new(rows, columns)?);
        Ok(())
    }

    /// Route a touch to the button first, then to the board.
    ///
    /// Actions raised by the button are performed here and also returned so
    /// the caller can log or react to them.
    pub fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        match self.randomize_button.handle_touch(event) {
            TouchResult::Action(action) => {
                self.perform(action);
                return Some(action);
            }
            TouchResult::Handled => return None,
            TouchResult::NotHandled => {}
        }

        match self.field_view.handle_touch(event) {
            TouchResult::Action(action) => {
                self.perform(action);
                Some(action)
            }
            TouchResult::Handled | TouchResult::NotHandled => None,
        }
    }

    /// Per-frame housekeeping: re-run layout if the board asked for it.
    pub fn update(&mut self) {
        if self.field_view.is_layout_requested() {
            self.layout();
        }
    }

    fn perform(&mut self, action: Action) {
        debug!("Performing {:?}", action);
        match action {
            Action::RandomizeField => {
                if let Err(e) = self.randomize() {
                    error!("Randomize failed: {}", e);
                }
            }
        }
    }

    fn replace_field(&mut self, field: Field) {
        self.field_view.set_field(Some(field));
        self.layout();
        self.dirty = true;
    }

    fn install_turn_handler(&mut self) {
        let player_x_turn = self.player_x_turn.clone();
        self.field_view
            .set_on_cell_action(move |row, column, field: &mut Field| {
                if field.get(row, column) != Ok(Cell::Empty) {
                    return;
                }
                let mark = if player_x_turn.get() {
                    Cell::PlayerX
                } else {
                    Cell::PlayerO
                };
                if field.set(row, column, mark).is_ok() {
                    player_x_turn.set(!player_x_turn.get());
                }
            });
    }

    /// Measure the board against the area under the header and center it there.
    fn layout(&mut self) {
        let body = Rectangle::new(
            self.bounds.top_left + Point::new(0, HEADER_HEIGHT_PX as i32),
            Size::new(
                self.bounds.size.width,
                self.bounds.size.height.saturating_sub(HEADER_HEIGHT_PX),
            ),
        );

        let size = self.field_view.measure(
            MeasureSpec::AtMost(body.size.width),
            MeasureSpec::AtMost(body.size.height),
        );
        let offset = Point::new(
            ((body.size.width - size.width) / 2) as i32,
            ((body.size.height - size.height) / 2) as i32,
        );
        self.field_view
            .set_bounds(Rectangle::new(body.top_left + offset, size));
    }
}

impl<R: Rng> Drawable for GameScreen<R> {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        use embedded_graphics::Drawable as _;

        self.bounds
            .into_styled(PrimitiveStyle::with_fill(COLOR_BACKGROUND))
            .draw(display)?;
        self.randomize_button.draw(display)?;
        self.field_view.draw(display)
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.randomize_button.is_dirty() || self.field_view.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.randomize_button.mark_clean();
        self.field_view.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
