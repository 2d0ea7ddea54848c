//! # Hunt Simulator
//!
//! Hunter/prey catch-feasibility simulation served over a small HTTP API.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       HUNT SIMULATOR                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/            - Pure primitives                          │
//! │  ├── position.rs  - Immutable 3D point                       │
//! │  ├── speed.rs     - Validated non-negative speed             │
//! │  └── positioner.rs- Euclidean distance seam                  │
//! │                                                              │
//! │  hunt/            - Actors and simulation                    │
//! │  ├── actor.rs     - Capabilities shared by species           │
//! │  ├── simulator.rs - Catch-feasibility strategy               │
//! │  ├── hunter.rs    - Hunter trait, white shark                │
//! │  ├── prey.rs      - Prey trait, tuna                         │
//! │  └── doubles.rs   - Stubs and mocks for every seam           │
//! │                                                              │
//! │  network/         - HTTP transport                           │
//! │  ├── protocol.rs  - Request/response bodies                  │
//! │  ├── handler.rs   - /hunter routes                           │
//! │  └── server.rs    - Configuration and serve loop             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Catch Model
//!
//! A hunt succeeds when `distance / hunter_speed <= max_time_to_catch`.
//! The bound is inclusive, prey speed is ignored, and a still hunter only
//! catches prey sharing its position.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod hunt;
pub mod network;

// Re-export commonly used types
pub use core::position::Position;
pub use core::speed::{Speed, SpeedError};
pub use core::positioner::{DefaultPositioner, Positioner};
pub use hunt::simulator::{CatchSimulator, DefaultCatchSimulator, SimulatorConfig, Subject};
pub use hunt::hunter::{HuntError, Hunter, WhiteShark, WhiteSharkConfig};
pub use hunt::prey::{Prey, Tuna};
pub use hunt::actor::Actor;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
