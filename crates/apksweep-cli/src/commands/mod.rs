//! Command implementations.

pub mod completion;
pub mod devices;
pub mod inspectors;
pub mod sweep;
