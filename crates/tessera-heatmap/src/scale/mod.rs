//! Tile sizing model.
//!
//! Color mapping lives in `tessera-core`; this module owns the sizing
//! side: square-root capital compression, the bounded move multiplier,
//! and header reservations.

mod size;

pub use size::{base_magnitude, header_size, move_multiplier, tile_size};
