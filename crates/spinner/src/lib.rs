//! Value controllers for the integer and decimal spinner controls.
//!
//! The controllers are plain synchronous state machines: hosts feed them raw
//! text and named operations (see `shared::input`), and they push formatted
//! display text back through a [`TextSurface`] and emit payload-free
//! value-changed events. Rendering, focus, and input binding stay with the
//! host.

pub mod bounds;
pub mod integer;
pub mod numeric;
pub mod options;
pub mod surface;

pub use bounds::{Bounded, SpinValue};
pub use integer::IntegerSpinner;
pub use numeric::{NumericSpinner, MAX_FRACTION_DIGITS};
pub use options::{NumericOptions, SpinnerOptions};
pub use surface::{CaretPolicy, TextSurface};

#[cfg(test)]
#[path = "tests/integer_tests.rs"]
mod integer_tests;

#[cfg(test)]
#[path = "tests/numeric_tests.rs"]
mod numeric_tests;
