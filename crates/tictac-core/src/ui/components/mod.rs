//! Reusable UI components

pub mod button;
pub mod field_view;

pub use button::Button;
pub use field_view::{FieldView, FieldViewStyle};
