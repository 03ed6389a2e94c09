//! A calendar date & time picker.
//!
//! A [`Picker`] holds the value being picked and applies the user's
//! interactions with a month-view calendar to it: clicking days, flipping
//! months, choosing a month or year from a dropdown, typing an hour or
//! minute, or jumping to the current moment.  After every change it builds a
//! fresh [`PickerView`] describing what to draw, and once the user commits or
//! cancels it reports the result through a callback.
//!
//! Drawing is left to the host; [`calendar::PickerPanel`] draws a view into
//! a [`ratatui`] buffer.
pub mod calendar;
mod error;
pub mod picker;
pub mod select;
pub mod theme;
pub use crate::error::{Field, OutOfTimeError, PickerError};
pub use crate::picker::{Outcome, Picker, PickerConfig, PickerEvent, PickerView};
