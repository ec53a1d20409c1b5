//! # surface-code-sim
//!
//! Toy surface code on a distance×distance grid of classical bits.
//!
//! The pipeline runs in five stages: a zero grid is created, the 2×2
//! plaquette checks are generated from the geometry, random bit flips are
//! injected, every check records the raw values of its four cells, and a
//! tally decoder flips every cell that any check saw as 1.
//!
//! ## Caveats
//!
//! - Syndromes are **raw cell values**, not XOR parities. A real surface code
//!   only reports odd-parity plaquettes; here a "1" in the table just means
//!   "this cell currently holds 1".
//! - The tally decoder is a heuristic, not minimum-weight matching. The count
//!   is used as a presence test only.
//! - Success means "back to the all-zero grid", the only logical state the
//!   model knows about.

pub mod error;
pub mod grid;
pub mod stabilizer;
pub mod noise;
pub mod syndrome;
pub mod decoder;
pub mod simulation;

pub use error::{Result, SurfaceCodeError};

pub mod prelude {
    pub use crate::error::SurfaceCodeError;
    pub use crate::grid::*;
    pub use crate::stabilizer::*;
    pub use crate::noise::*;
    pub use crate::syndrome::*;
    pub use crate::decoder::*;
    pub use crate::simulation::*;
}
