//! Catch Simulation
//!
//! Decides whether a hunter can reach its prey within a time budget.
//!
//! The model is straight-line pursuit: closing time is the distance divided
//! by the hunter's speed. Prey speed is carried in the snapshot but does not
//! affect the result.

use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::core::position::Position;
use crate::core::positioner::{DefaultPositioner, Positioner};
use crate::core::speed::Speed;

/// Speed and position of one actor at the moment of evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Subject {
    /// Current speed.
    pub speed: Speed,
    /// Current position.
    pub position: Position,
}

impl Subject {
    /// Create a snapshot.
    pub const fn new(speed: Speed, position: Position) -> Self {
        Self { speed, position }
    }
}

/// Catch-feasibility strategy.
///
/// Implementations hold no per-call state and may be shared freely.
pub trait CatchSimulator: Send + Sync {
    /// True when `hunter` reaches `prey` within the simulator's budget.
    fn can_catch(&self, hunter: &Subject, prey: &Subject) -> bool;
}

/// Configuration for [`DefaultCatchSimulator`].
#[derive(Clone)]
pub struct SimulatorConfig {
    /// Upper bound on closing time for a catch to count.
    pub max_time_to_catch: f64,
    /// Distance strategy.
    pub positioner: Arc<dyn Positioner>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_time_to_catch: 0.0,
            positioner: Arc::new(DefaultPositioner::new()),
        }
    }
}

impl fmt::Debug for SimulatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatorConfig")
            .field("max_time_to_catch", &self.max_time_to_catch)
            .finish_non_exhaustive()
    }
}

/// Straight-line pursuit against a fixed time budget.
pub struct DefaultCatchSimulator {
    max_time_to_catch: f64,
    positioner: Arc<dyn Positioner>,
}

impl DefaultCatchSimulator {
    /// Build a simulator.
    ///
    /// A negative or NaN budget is treated as zero: only a hunter already on
    /// top of its prey catches it.
    pub fn new(config: SimulatorConfig) -> Self {
        let max_time_to_catch = if config.max_time_to_catch >= 0.0 {
            config.max_time_to_catch
        } else {
            0.0
        };

        Self {
            max_time_to_catch,
            positioner: config.positioner,
        }
    }

    /// Configured budget.
    pub fn max_time_to_catch(&self) -> f64 {
        self.max_time_to_catch
    }

    /// Time for the hunter to reach the prey's position.
    ///
    /// Returns `None` when the hunter is still and the prey is elsewhere.
    pub fn closing_time(&self, hunter: &Subject, prey: &Subject) -> Option<f64> {
        let distance = self.positioner.distance(hunter.position, prey.position);
        if distance == 0.0 {
            return Some(0.0);
        }
        if hunter.speed.is_zero() {
            return None;
        }
        Some(distance / hunter.speed.get())
    }
}

impl CatchSimulator for DefaultCatchSimulator {
    fn can_catch(&self, hunter: &Subject, prey: &Subject) -> bool {
        match self.closing_time(hunter, prey) {
            Some(time) => {
                let caught = time <= self.max_time_to_catch;
                debug!(
                    closing_time = time,
                    max_time_to_catch = self.max_time_to_catch,
                    caught,
                    "catch evaluated"
                );
                caught
            }
            None => {
                debug!("hunter cannot move, prey unreachable");
                false
            }
        }
    }
}

impl fmt::Debug for DefaultCatchSimulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultCatchSimulator")
            .field("max_time_to_catch", &self.max_time_to_catch)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TESTS
// =============================================================================
