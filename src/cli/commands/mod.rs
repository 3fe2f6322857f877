//! Command implementations.

/// Table conversion command handler.
pub mod convert;
