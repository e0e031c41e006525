//! Core UI traits and types shared by every widget

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Represents a 2D touch point on the display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Touch events that can occur on the UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// Finger (or mouse button) went down
    Press(TouchPoint),
    /// Pointer moved while held down
    Drag(TouchPoint),
    /// Finger lifted
    Release(TouchPoint),
}

/// Result from handling a touch event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchResult {
    /// Event was handled by this element
    Handled,
    /// Event was not handled, pass to next element
    NotHandled,
    /// Event triggered an action
    Action(Action),
}

/// Actions that UI elements can hand back to their host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Replace the board with a randomly sized and filled one
    RandomizeField,
}

/// Size requirement passed down by the host layout for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The host dictates this exact size
    Exactly(u32),
    /// The element may be as large as it wants up to this size
    AtMost(u32),
    /// No constraint
    Unspecified,
}

impl MeasureSpec {
    /// Reconcile a desired size with this constraint.
    pub fn resolve(self, desired: u32) -> u32 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(size) => desired.min(size),
            MeasureSpec::Unspecified => desired,
        }
    }
}

/// Trait for any UI element that can be drawn
pub trait Drawable {
    /// Draw the element to the display within its bounds
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error>;

    /// Get the bounds of this drawable element
    fn bounds(&self) -> Rectangle;

    /// Check if this element needs to be redrawn
    fn is_dirty(&self) -> bool;

    /// Mark this element as clean (already drawn)
    fn mark_clean(&mut self);

    /// Mark this element as dirty (needs redraw)
    fn mark_dirty(&mut self);
}

/// Trait for UI elements that respond to touch events
pub trait Touchable {
    /// Check if a point is within this element's bounds
    fn contains_point(&self, point: TouchPoint) -> bool;

    /// Handle a touch event, returns result indicating if handled and any action
    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult;
}
