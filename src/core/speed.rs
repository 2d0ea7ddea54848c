//! Actor Speed
//!
//! Maximum straight-line travel rate of an actor.
//! Always finite and non-negative once constructed.

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Rejected speed values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpeedError {
    /// Speed below zero.
    #[error("speed must be non-negative, got {0}")]
    Negative(f64),
    /// NaN or infinite speed.
    #[error("speed must be a finite number")]
    NotFinite,
}

/// A validated, non-negative speed.
#[derive(Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Speed(f64);

impl Speed {
    /// Standing still.
    pub const ZERO: Self = Self(0.0);

    /// Validate and wrap a raw speed.
    pub fn new(value: f64) -> Result<Self, SpeedError> {
        if !value.is_finite() {
            return Err(SpeedError::NotFinite);
        }
        if value < 0.0 {
            return Err(SpeedError::Negative(value));
        }
        Ok(Self(value))
    }

    /// Raw value.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// True when the actor cannot move.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<f64> for Speed {
    type Error = SpeedError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Speed> for f64 {
    fn from(speed: Speed) -> Self {
        speed.0
    }
}

impl fmt::Debug for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Speed({})", self.0)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_accepts_non_negative() {
        assert_eq!(Speed::new(0.0).unwrap(), Speed::ZERO);
        assert_eq!(Speed::new(4.5).unwrap().get(), 4.5);
        assert!(Speed::ZERO.is_zero());
    }

    #[test]
    fn test_speed_rejects_invalid() {
        assert_eq!(Speed::new(-1.0), Err(SpeedError::Negative(-1.0)));
        assert_eq!(Speed::new(f64::NAN), Err(SpeedError::NotFinite));
        assert_eq!(Speed::new(f64::INFINITY), Err(SpeedError::NotFinite));
    }

    #[test]
    fn test_speed_serde_validates() {
        let speed: Speed = serde_json::from_str("4.0").unwrap();
        assert_eq!(speed.get(), 4.0);

        let err = serde_json::from_str::<Speed>("-2.0").unwrap_err();
        assert!(err.to_string().contains("speed must be non-negative"));
    }
}
