//! Hardware-independent core library for tictac-rs
//!
//! This crate contains the platform-agnostic pieces of the tic-tac-toe
//! board: the [`field::Field`] model with change listeners, the
//! [`ui::FieldView`] widget that draws and hit-tests it, and the
//! [`screen::GameScreen`] host that plays alternating turns.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod field;
pub mod screen;
pub mod ui;

pub use field::{Cell, Field, FieldError, FieldResult, ListenerId};
