//! Distance Computation
//!
//! The `Positioner` seam measures how far apart two positions are.
//! Simulators receive one at construction so tests can swap in a stub.

use super::position::Position;

/// Measures distance between two points.
pub trait Positioner: Send + Sync {
    /// Distance from `from` to `to`. Always `>= 0` for finite inputs.
    fn distance(&self, from: Position, to: Position) -> f64;
}

/// Straight-line Euclidean distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPositioner;

impl DefaultPositioner {
    /// Create a new Euclidean positioner.
    pub const fn new() -> Self {
        Self
    }
}

impl Positioner for DefaultPositioner {
    #[inline]
    fn distance(&self, from: Position, to: Position) -> f64 {
        (from - to).length()
    }
}
