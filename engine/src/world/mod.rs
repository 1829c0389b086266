//! World Module
//!
//! World-space configuration: the ground plane and the snapping grid
//! that pointer hits are quantized onto.

pub mod grid;

pub use grid::{GridConfig, GridPoint};
