//! UI layer: touch/draw traits, styling, and components
//!
//! Everything draws to an `embedded-graphics` `DrawTarget<Color = Rgb565>`,
//! so the same code runs against a hardware framebuffer, the SDL simulator,
//! or a `MockDisplay` in tests.

pub mod components;
pub mod core;
pub mod styling;

pub use components::{Button, FieldView, FieldViewStyle};
pub use self::core::{Action, Drawable, MeasureSpec, TouchEvent, TouchPoint, TouchResult, Touchable};
pub use styling::Padding;

/// Display width in pixels
pub const DISPLAY_WIDTH_PX: u16 = 320;

/// Display height in pixels
pub const DISPLAY_HEIGHT_PX: u16 = 240;
