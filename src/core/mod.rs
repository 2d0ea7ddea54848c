//! Core primitives.
//!
//! Plain value types and the distance seam. Nothing here does I/O.

pub mod position;
pub mod speed;
pub mod positioner;

// Re-export core types
pub use position::Position;
pub use speed::{Speed, SpeedError};
pub use positioner::{DefaultPositioner, Positioner};
