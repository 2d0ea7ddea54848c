//! Hunter Species
//!
//! Hunters evaluate hunts through an injected [`CatchSimulator`].

use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::position::Position;
use crate::core::speed::Speed;
use crate::hunt::actor::Actor;
use crate::hunt::prey::Prey;
use crate::hunt::simulator::CatchSimulator;

/// Hunt outcomes other than success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HuntError {
    /// The prey is out of reach within the time budget.
    #[error("can not hunt the prey")]
    CanNotHunt,
}

/// An actor able to chase prey.
pub trait Hunter: Actor {
    /// Try to catch `prey` from the current state.
    fn hunt(&self, prey: &dyn Prey) -> Result<(), HuntError>;
}

/// Construction parameters for [`WhiteShark`].
#[derive(Clone)]
pub struct WhiteSharkConfig {
    /// Initial speed.
    pub speed: Speed,
    /// Initial position.
    pub position: Position,
    /// Strategy used to decide hunts.
    pub simulator: Arc<dyn CatchSimulator>,
}

/// White shark: the default hunter species.
pub struct WhiteShark {
    speed: Speed,
    position: Position,
    simulator: Arc<dyn CatchSimulator>,
}

impl WhiteShark {
    /// Create a shark from its configuration.
    pub fn new(config: WhiteSharkConfig) -> Self {
        Self {
            speed: config.speed,
            position: config.position,
            simulator: config.simulator,
        }
    }
}

impl Actor for WhiteShark {
    fn configure(&mut self, speed: Speed, position: Position) {
        debug!(%speed, %position, "white shark configured");
        self.speed = speed;
        self.position = position;
    }

    fn speed(&self) -> Speed {
        self.speed
    }

    fn position(&self) -> Position {
        self.position
    }
}

impl Hunter for WhiteShark {
    fn hunt(&self, prey: &dyn Prey) -> Result<(), HuntError> {
        let target = prey.subject();
        if self.simulator.can_catch(&self.subject(), &target) {
            info!(hunter = %self.position, prey = %target.position, "prey caught");
            Ok(())
        } else {
            info!(hunter = %self.position, prey = %target.position, "prey escaped");
            Err(HuntError::CanNotHunt)
        }
    }
}

impl fmt::Debug for WhiteShark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhiteShark")
            .field("speed", &self.speed)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TESTS
// =============================================================================
