//! Test Doubles
//!
//! Stand-ins for each seam of the hunt: distance, simulation, hunter and
//! prey. Stubs return canned values; mocks also record how they were called.

use std::sync::{Mutex, MutexGuard};

use crate::core::position::Position;
use crate::core::positioner::Positioner;
use crate::core::speed::Speed;
use crate::hunt::actor::Actor;
use crate::hunt::hunter::{HuntError, Hunter};
use crate::hunt::prey::Prey;
use crate::hunt::simulator::{CatchSimulator, Subject};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// =============================================================================
// POSITIONER
// =============================================================================

/// Positioner that reports the same distance for any pair.
#[derive(Debug, Clone, Copy)]
pub struct PositionerStub {
    distance: f64,
}

impl PositionerStub {
    /// Always answer `distance`.
    pub const fn new(distance: f64) -> Self {
        Self { distance }
    }
}

impl Positioner for PositionerStub {
    fn distance(&self, _from: Position, _to: Position) -> f64 {
        self.distance
    }
}

// =============================================================================
// SIMULATOR
// =============================================================================

/// Simulator with a scripted answer that records every evaluation.
#[derive(Debug, Default)]
pub struct CatchSimulatorMock {
    answer: bool,
    calls: Mutex<Vec<(Subject, Subject)>>,
}

impl CatchSimulatorMock {
    /// Always answer `answer`.
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of `can_catch` calls so far.
    pub fn calls(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Hunter and prey snapshots of the most recent call.
    pub fn last_call(&self) -> Option<(Subject, Subject)> {
        lock(&self.calls).last().copied()
    }
}

impl CatchSimulator for CatchSimulatorMock {
    fn can_catch(&self, hunter: &Subject, prey: &Subject) -> bool {
        lock(&self.calls).push((*hunter, *prey));
        self.answer
    }
}

// =============================================================================
// ACTORS
// =============================================================================

/// Prey holding fixed state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreyStub {
    speed: Speed,
    position: Position,
}

impl PreyStub {
    /// Create a prey stub.
    pub const fn new(speed: Speed, position: Position) -> Self {
        Self { speed, position }
    }
}

impl Actor for PreyStub {
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

impl Prey for PreyStub {}

/// Hunter with a scripted hunt result that records calls.
#[derive(Debug)]
pub struct HunterMock {
    result: Result<(), HuntError>,
    subject: Subject,
    configured: Mutex<Vec<Subject>>,
    hunted: Mutex<Vec<Subject>>,
}

impl HunterMock {
    /// Hunts always end with `result`.
    pub fn new(result: Result<(), HuntError>) -> Self {
        Self {
            result,
            subject: Subject::default(),
            configured: Mutex::new(Vec::new()),
            hunted: Mutex::new(Vec::new()),
        }
    }

    /// Every `configure` call, in order.
    pub fn configure_calls(&self) -> Vec<Subject> {
        lock(&self.configured).clone()
    }

    /// Prey snapshot of every `hunt` call, in order.
    pub fn hunt_calls(&self) -> Vec<Subject> {
        lock(&self.hunted).clone()
    }
}

impl Actor for HunterMock {
    fn configure(&mut self, speed: Speed, position: Position) {
        self.subject = Subject::new(speed, position);
        lock(&self.configured).push(self.subject);
    }

    fn speed(&self) -> Speed {
        self.subject.speed
    }

    fn position(&self) -> Position {
        self.subject.position
    }
}

impl Hunter for HunterMock {
    fn hunt(&self, prey: &dyn Prey) -> Result<(), HuntError> {
        lock(&self.hunted).push(prey.subject());
        self.result
    }
}
