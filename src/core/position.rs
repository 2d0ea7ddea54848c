//! 3D Position
//!
//! Immutable point value used for hunter and prey placement.
//! Reconfiguring an actor replaces its position wholesale.

use std::fmt;
use std::ops::Sub;
use serde::{Serialize, Deserialize};

/// A point in 3D space.
///
/// Serialized with upper-case keys (`X`, `Y`, `Z`) to match the HTTP payloads;
/// lower-case keys are accepted on input.
#[derive(Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    #[serde(rename = "X", alias = "x")]
    x: f64,
    #[serde(rename = "Y", alias = "y")]
    y: f64,
    #[serde(rename = "Z", alias = "z")]
    z: f64,
}

impl Position {
    /// The origin.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Create a new position.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// X coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Z coordinate.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Component-wise difference `self - other`, as a displacement.
    #[inline]
    pub fn offset_from(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    /// Squared length of this position taken as a vector from the origin.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Length (Euclidean norm).
    ///
    /// Scaled through `hypot` so huge or tiny coordinates neither overflow
    /// nor flush to zero.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.offset_from(rhs)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {}, {})", self.x, self.y, self.z)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

// =============================================================================
// TESTS
// =============================================================================
