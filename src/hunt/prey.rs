//! Prey Species
//!
//! Prey are passive state holders read by a hunter during a hunt.

use crate::core::position::Position;
use crate::core::speed::Speed;
use crate::hunt::actor::Actor;

/// A huntable actor.
pub trait Prey: Actor {}

/// Tuna: the default prey species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuna {
    speed: Speed,
    position: Position,
}

impl Tuna {
    /// Create a tuna at `position` swimming at `speed`.
    pub const fn new(speed: Speed, position: Position) -> Self {
        Self { speed, position }
    }
}

impl Actor for Tuna {
    fn configure(&mut self, speed: Speed, position: Position) {
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

impl Prey for Tuna {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuna_configure_replaces_state() {
        let mut tuna = Tuna::new(Speed::new(1.0).unwrap(), Position::ORIGIN);
        tuna.configure(Speed::new(4.0).unwrap(), Position::new(0.1, 0.4, 3.1));

        assert_eq!(tuna.speed().get(), 4.0);
        assert_eq!(tuna.position(), Position::new(0.1, 0.4, 3.1));

        let subject = tuna.subject();
        assert_eq!(subject.speed, tuna.speed());
        assert_eq!(subject.position, tuna.position());
    }
}
