//! Push button that reports an [`Action`] when pressed

use crate::ui::core::{Action, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::styling::{COLOR_BUTTON, COLOR_BUTTON_PRESSED, WHITE};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment as TextAlignment, Baseline, Text, TextStyleBuilder};

/// Corner radius of the button background
const BORDER_RADIUS_PX: u32 = 6;

/// Button component with label and action
///
/// Triggers its action immediately on press and shows a darker fill while
/// the touch stays over it.
///
/// # Examples
/// ```ignore
/// let button = Button::new(
///     Rectangle::new(Point::new(10, 6), Size::new(100, 28)),
///     "Randomize",
///     Action::RandomizeField,
/// );
/// ```
pub struct Button {
    bounds: Rectangle,
    label: heapless::String<32>,
    action: Action,
    pressed: bool,
    tracking: bool,
    dirty: bool,
}

impl Button {
    /// Create a button. Labels longer than 32 bytes are dropped.
    pub fn new(bounds: Rectangle, label: &str, action: Action) -> Self {
        let mut label_string = heapless::String::new();
        label_string.push_str(label).ok();

        Self {
            bounds,
            label: label_string,
            action,
            pressed: false,
            tracking: false,
            dirty: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn set_pressed(&mut self, pressed: bool) {
        if self.pressed != pressed {
            self.pressed = pressed;
            self.dirty = true;
        }
    }
}

impl Drawable for Button {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let fill = if self.pressed {
            COLOR_BUTTON_PRESSED
        } else {
            COLOR_BUTTON
        };

        RoundedRectangle::with_equal_corners(
            self.bounds,
            Size::new(BORDER_RADIUS_PX, BORDER_RADIUS_PX),
        )
        .into_styled(PrimitiveStyle::with_fill(fill))
        .draw(display)?;

        let character_style = MonoTextStyle::new(&FONT_6X10, WHITE);
        let text_style = TextStyleBuilder::new()
            .alignment(TextAlignment::Center)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(&self.label, self.bounds.center(), character_style, text_style)
            .draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Touchable for Button {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            TouchEvent::Press(point) if self.contains_point(point) => {
                self.tracking = true;
                self.set_pressed(true);
                TouchResult::Action(self.action)
            }
            TouchEvent::Drag(point) if self.tracking => {
                let over = self.contains_point(point);
                self.set_pressed(over);
                TouchResult::Handled
            }
            TouchEvent::Release(_) if self.tracking => {
                self.tracking = false;
                self.set_pressed(false);
                TouchResult::Handled
            }
            _ => TouchResult::NotHandled,
        }
    }
}
