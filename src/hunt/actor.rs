//! Actor Capabilities
//!
//! What every hunter or prey species can do, independent of its role.

use crate::core::position::Position;
use crate::core::speed::Speed;
use crate::hunt::simulator::Subject;

/// A configurable participant in a hunt.
pub trait Actor: Send + Sync {
    /// Replace speed and position wholesale.
    fn configure(&mut self, speed: Speed, position: Position);

    /// Current speed.
    fn speed(&self) -> Speed;

    /// Current position.
    fn position(&self) -> Position;

    /// Snapshot for simulation.
    fn subject(&self) -> Subject {
        Subject::new(self.speed(), self.position())
    }
}
