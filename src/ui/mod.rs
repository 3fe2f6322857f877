//! Terminal styling for status and error messages.

mod theme;

pub use theme::Style;
