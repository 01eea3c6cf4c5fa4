//! Error types for the Mnema protocol layer.

mod memory;

pub use memory::*;
